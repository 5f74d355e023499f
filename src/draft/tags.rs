/// Keys the tag field reacts to. Anything else is ordinary typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Enter,
    Comma,
    Other,
}

/// Text buffer behind the tag field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    buffer: String,
}

impl TagInput {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Enter or comma commits the trimmed buffer. Returns whether a tag was added.
    ///
    /// Manual entry does not check for duplicates.
    pub fn key(&mut self, key: TagKey, tags: &mut Vec<String>) -> bool {
        if key == TagKey::Other {
            return false;
        }
        let candidate = self.buffer.trim();
        if candidate.is_empty() {
            return false;
        }
        tags.push(candidate.to_string());
        self.buffer.clear();
        true
    }

    /// Splits pasted text on commas and appends unseen tags in first-seen order.
    /// The buffer is left untouched.
    pub fn paste(&self, text: &str, tags: &mut Vec<String>) -> usize {
        let before = tags.len();
        for segment in text.split(',').map(str::trim) {
            if segment.is_empty() || tags.iter().any(|tag| tag == segment) {
                continue;
            }
            tags.push(segment.to_string());
        }
        tags.len() - before
    }
}

/// Removes by value, so duplicates go together.
pub fn remove_tag(tags: &mut Vec<String>, value: &str) -> usize {
    let before = tags.len();
    tags.retain(|tag| tag != value);
    before - tags.len()
}
