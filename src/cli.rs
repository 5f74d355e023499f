use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::api::host::EventListQuery;
use crate::api::ApiClient;
use crate::config::{AppConfig, ConfigStore};
use crate::console::{self, support, trust, Confirmation, EventAction, SupportTransition};
use crate::draft::{remove_tag, EventDraft, LocalFile, TagInput, TagKey, TierField};
use crate::models::{EventSummary, Paginated};
use crate::session::SessionContext;
use crate::submission;
use crate::workflow::{EditPhase, EditSession};

#[derive(Parser, Debug)]
#[command(
    name = "event-host",
    author,
    version,
    about = "Host and admin console for the event ticketing API"
)]
pub struct Cli {
    /// Answer yes to every confirmation prompt.
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and out, or show the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// The host's own events.
    Events {
        #[command(subcommand)]
        action: EventsAction,
    },
    Host {
        #[command(subcommand)]
        action: HostAction,
    },
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },
    Tickets {
        #[command(subcommand)]
        action: TicketsAction,
    },
    Kyc {
        #[command(subcommand)]
        action: KycAction,
    },
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand, Debug)]
enum AuthAction {
    AdminLogin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    AdminLogout,
    /// Store the host's bearer token.
    SetToken { token: String },
    ClearToken,
    Whoami,
}

#[derive(Subcommand, Debug)]
enum EventsAction {
    List(ListArgs),
    Show { id: String },
    Publish { id: String },
    Unpublish { id: String },
    Delete { id: String },
    /// Load an event, apply the given edits and submit the result.
    Edit(EditArgs),
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    search: Option<String>,
    /// all, draft, published, ...
    #[arg(long, default_value = "all")]
    status: String,
}

#[derive(Args, Debug, Default)]
struct EditArgs {
    id: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    start_date: Option<String>,
    #[arg(long, value_name = "HH:MM")]
    start_time: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    end_date: Option<String>,
    #[arg(long, value_name = "HH:MM")]
    end_time: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    lng: Option<f64>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Comma separated tags, merged without duplicates.
    #[arg(long)]
    paste_tags: Option<String>,
    #[arg(long = "remove-tag")]
    remove_tags: Vec<String>,
    #[arg(long = "add-tier", value_name = "NAME:PRICE:QTY[:DESCRIPTION]")]
    add_tiers: Vec<String>,
    /// Positions refer to the tier list as loaded.
    #[arg(long = "remove-tier")]
    remove_tiers: Vec<usize>,
    #[arg(long = "set-tier", value_name = "INDEX.FIELD=VALUE")]
    set_tiers: Vec<String>,
    #[arg(long = "add-media")]
    add_media: Vec<PathBuf>,
    /// Positions refer to the media list as loaded.
    #[arg(long = "remove-media")]
    remove_media: Vec<usize>,
    /// Print the form that would be sent instead of sending it.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum HostAction {
    Stats,
    /// Latest sales and payouts on the dashboard.
    Activity,
    /// Chart series; the backend chooses the window when no range is given.
    Chart {
        #[arg(long)]
        range: Option<String>,
    },
    TrustScore,
}

#[derive(Subcommand, Debug)]
enum WalletAction {
    SetPin {
        #[arg(long)]
        pin: String,
        #[arg(long)]
        confirm: String,
    },
    Limit { event_id: String },
    Withdraw { event_id: String, amount: f64 },
}

#[derive(Subcommand, Debug)]
enum TicketsAction {
    Refund { ticket_id: String },
}

#[derive(Subcommand, Debug)]
enum KycAction {
    /// Show the verification widget settings.
    Config,
    /// Forward a widget result (JSON file) to the backend.
    Complete {
        #[arg(long, value_name = "FILE")]
        result: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum AdminAction {
    Events {
        #[command(subcommand)]
        action: AdminEventsAction,
    },
    Users {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Support {
        #[command(subcommand)]
        action: SupportAction,
    },
    Trust {
        #[command(subcommand)]
        action: TrustAction,
    },
    Finance {
        #[command(subcommand)]
        action: FinanceAction,
    },
}

#[derive(Subcommand, Debug)]
enum AdminEventsAction {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Approve { id: String },
    Reject { id: String },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum SupportAction {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Show { id: String },
    Reply { id: String, message: String },
    /// resolve, close or reopen
    Status { id: String, transition: SupportTransition },
}

#[derive(Subcommand, Debug)]
enum TrustAction {
    Tiers,
    SetTier {
        index: usize,
        field: String,
        value: String,
    },
    Settings,
    Set { key: String, value: String },
}

#[derive(Subcommand, Debug)]
enum FinanceAction {
    Stats,
    Payouts {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Process { id: String },
    Reject { id: String },
}

struct App {
    store: ConfigStore,
    config: AppConfig,
    assume_yes: bool,
}

impl App {
    fn user_session(&self) -> SessionContext {
        SessionContext::user_session(&self.config)
    }

    fn user_api(&self) -> anyhow::Result<ApiClient> {
        let session = self.user_session();
        session.require_token()?;
        Ok(ApiClient::for_session(&self.config.api_base_url, &session))
    }

    fn admin_api(&self) -> anyhow::Result<ApiClient> {
        let session = SessionContext::admin_session(&self.config);
        session.require_token()?;
        Ok(ApiClient::for_session(&self.config.api_base_url, &session))
    }

    fn confirm(&self, confirmation: &Confirmation) -> anyhow::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        let marker = if confirmation.destructive { " (destructive)" } else { "" };
        println!("{}{marker}", confirmation.title);
        print!("{} [y/N] ", confirmation.message);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin()
            .read_line(&mut answer)
            .context("failed to read confirmation")?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

pub async fn dispatch(cli: Cli, store: ConfigStore) -> anyhow::Result<()> {
    let config = store.read().with_env_overrides();
    log::debug!("using api at {}", config.api_base_url);
    let app = App {
        store,
        config,
        assume_yes: cli.yes,
    };
    match cli.command {
        Commands::Auth { action } => auth(&app, action).await,
        Commands::Events { action } => events(&app, action).await,
        Commands::Host { action } => host(&app, action).await,
        Commands::Wallet { action } => wallet(&app, action).await,
        Commands::Tickets { action } => tickets(&app, action).await,
        Commands::Kyc { action } => kyc(&app, action).await,
        Commands::Admin { action } => admin(&app, action).await,
    }
}

async fn auth(app: &App, action: AuthAction) -> anyhow::Result<()> {
    match action {
        AuthAction::AdminLogin { email, password } => {
            let api = ApiClient::new(&app.config.api_base_url, None);
            let login = api
                .admin()
                .login(&email, &password)
                .await
                .map_err(|err| anyhow!(err.message_or("Login failed").to_string()))?;
            app
                .store
                .update(|config| config.admin_token = Some(login.token))
                .context("failed to store admin token")?;
            println!("Signed in as admin");
        }
        AuthAction::AdminLogout => {
            if let Ok(api) = app.admin_api() {
                if let Err(err) = api.admin().logout().await {
                    log::warn!("admin logout request failed: {err}");
                }
            }
            app
                .store
                .update(|config| config.admin_token = None)
                .context("failed to clear admin token")?;
            println!("Signed out");
        }
        AuthAction::SetToken { token } => {
            let token = token.trim().to_string();
            if token.is_empty() {
                bail!("token cannot be empty");
            }
            app
                .store
                .update(|config| config.user_token = Some(token))
                .context("failed to store token")?;
            println!("Token saved");
        }
        AuthAction::ClearToken => {
            app
                .store
                .update(|config| {
                    config.user_token = None;
                    config.user = None;
                })
                .context("failed to clear token")?;
            println!("Token cleared");
        }
        AuthAction::Whoami => {
            let session = app.user_session();
            println!("api: {}", app.config.api_base_url);
            println!("config: {}", app.store.path().display());
            println!("host token: {}", yes_no(session.token().is_some()));
            println!("admin token: {}", yes_no(app.config.admin_token.is_some()));
            if let Some(user) = session.current_user() {
                println!(
                    "user: {} ({})",
                    user.name.as_deref().unwrap_or("-"),
                    user.id
                );
                println!(
                    "kyc: {}",
                    user.kyc_status.as_deref().unwrap_or("unverified")
                );
            }
            if session.needs_verification() {
                println!("Identity verification is required before creating events.");
            }
        }
    }
    Ok(())
}

async fn events(app: &App, action: EventsAction) -> anyhow::Result<()> {
    let api = app.user_api()?;
    match action {
        EventsAction::List(args) => {
            let query = EventListQuery::page(args.page)
                .with_search(args.search)
                .with_status(&args.status);
            list_events(&api, &query).await?;
        }
        EventsAction::Show { id } => {
            let session = EditSession::load(&api, &id, app.config.timezone()).await;
            let draft = loaded_draft(&session)?;
            print_draft(draft);
        }
        EventsAction::Publish { id } => {
            event_action(app, &api, &id, EventAction::Publish).await?;
        }
        EventsAction::Unpublish { id } => {
            event_action(app, &api, &id, EventAction::Unpublish).await?;
        }
        EventsAction::Delete { id } => {
            event_action(app, &api, &id, EventAction::Delete).await?;
        }
        EventsAction::Edit(args) => edit_event(app, &api, args).await?,
    }
    Ok(())
}

async fn list_events(api: &ApiClient, query: &EventListQuery) -> anyhow::Result<()> {
    console::requested_page(query.page)?;
    let page: Paginated<EventSummary> = api
        .host()
        .events(query)
        .await
        .context("failed to load events")?;
    let meta = page.page_meta();
    console::target_page(&meta, query.page)?;
    for event in &page.data {
        println!("{}\t{}\t{}", event.id, event.status, event.title);
    }
    println!(
        "page {} of {} ({} events)",
        meta.current_page,
        meta.last_page.max(1),
        meta.total
    );
    Ok(())
}

async fn event_action(
    app: &App,
    api: &ApiClient,
    id: &str,
    action: EventAction,
) -> anyhow::Result<()> {
    let detail = api
        .host()
        .event_details(id)
        .await
        .with_context(|| format!("failed to load event {id}"))?;
    let status = detail.event.status.as_deref().unwrap_or_default();
    if !EventAction::available_for(status).contains(&action) {
        bail!("event {id} is already {status}");
    }
    if !app.confirm(&action.confirmation())? {
        println!("Cancelled");
        return Ok(());
    }
    action
        .execute(api, id)
        .await
        .map_err(|err| anyhow!(err.message_or("Action failed").to_string()))?;
    println!("Done");
    list_events(api, &EventListQuery::page(1)).await
}

async fn edit_event(app: &App, api: &ApiClient, args: EditArgs) -> anyhow::Result<()> {
    let mut session = EditSession::load(api, &args.id, app.config.timezone()).await;
    loaded_draft(&session)?;
    let draft = session
        .draft_mut()
        .context("event is not editable right now")?;
    apply_edits(draft, &args)?;

    if args.dry_run {
        let draft = loaded_draft(&session)?;
        if let Err(issues) = submission::validate(draft) {
            for issue in issues {
                println!("! {issue}");
            }
        }
        for field in submission::encode(draft) {
            println!("{}", field.describe());
        }
        return Ok(());
    }

    session.submit(api).await?;
    println!("Event updated");
    Ok(())
}

fn loaded_draft(session: &EditSession) -> anyhow::Result<&EventDraft> {
    if let EditPhase::LoadFailed(message) = session.phase() {
        bail!("{message}");
    }
    session.draft().context("event is not loaded")
}

fn apply_edits(draft: &mut EventDraft, args: &EditArgs) -> anyhow::Result<()> {
    let scalars = [
        (&mut draft.title, &args.title),
        (&mut draft.category, &args.category),
        (&mut draft.description, &args.description),
        (&mut draft.start_date, &args.start_date),
        (&mut draft.start_time, &args.start_time),
        (&mut draft.end_date, &args.end_date),
        (&mut draft.end_time, &args.end_time),
        (&mut draft.location, &args.location),
    ];
    for (slot, value) in scalars {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
    if args.lat.is_some() {
        draft.lat = args.lat;
    }
    if args.lng.is_some() {
        draft.lng = args.lng;
    }

    let mut input = TagInput::default();
    for tag in &args.tags {
        input.set_text(tag.as_str());
        input.key(TagKey::Enter, &mut draft.tags);
    }
    if let Some(text) = &args.paste_tags {
        input.paste(text, &mut draft.tags);
    }
    for tag in &args.remove_tags {
        remove_tag(&mut draft.tags, tag);
    }

    for assignment in &args.set_tiers {
        let (index, field, value) = parse_tier_assignment(assignment)?;
        draft.update_tier(index, field, value)?;
    }
    for index in descending(&args.remove_tiers) {
        draft.remove_tier(index)?;
    }
    for spec in &args.add_tiers {
        let values = parse_tier_spec(spec)?;
        draft.add_tier();
        let index = draft.tiers.len() - 1;
        let fields = [
            TierField::Name,
            TierField::Price,
            TierField::Quantity,
            TierField::Description,
        ];
        for (field, value) in fields.into_iter().zip(values) {
            draft.update_tier(index, field, value)?;
        }
    }

    for index in descending(&args.remove_media) {
        draft.media.remove(index)?;
    }
    for path in &args.add_media {
        if !path.is_file() {
            bail!("no such file: {}", path.display());
        }
    }
    draft
        .media
        .add_files(args.add_media.iter().cloned().map(LocalFile::from_path));
    Ok(())
}

fn descending(indices: &[usize]) -> Vec<usize> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    sorted
}

/// `NAME:PRICE:QTY[:DESCRIPTION]`; the description may itself contain colons.
fn parse_tier_spec(spec: &str) -> anyhow::Result<Vec<String>> {
    let parts: Vec<String> = spec.splitn(4, ':').map(str::to_string).collect();
    if parts.len() < 3 {
        bail!("expected NAME:PRICE:QTY[:DESCRIPTION], got {spec:?}");
    }
    Ok(parts)
}

/// `INDEX.FIELD=VALUE`, e.g. `0.price=5000`.
fn parse_tier_assignment(text: &str) -> anyhow::Result<(usize, TierField, String)> {
    let (target, value) = text
        .split_once('=')
        .with_context(|| format!("expected INDEX.FIELD=VALUE, got {text:?}"))?;
    let (index, field) = target
        .split_once('.')
        .with_context(|| format!("expected INDEX.FIELD=VALUE, got {text:?}"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .with_context(|| format!("invalid tier index in {text:?}"))?;
    let field = field.parse::<TierField>().map_err(|err| anyhow!(err))?;
    Ok((index, field, value.to_string()))
}

fn print_draft(draft: &EventDraft) {
    println!("title: {}", draft.title);
    println!("category: {}", draft.category);
    println!("starts: {} {}", draft.start_date, draft.start_time);
    if let Some(end) = submission::combined_end(draft) {
        println!("ends: {end}");
    }
    println!("location: {}", draft.location);
    if let (Some(lat), Some(lng)) = (draft.lat, draft.lng) {
        println!("coordinates: {lat}, {lng}");
    }
    println!("tags: {}", draft.tags.join(", "));
    println!("description: {}", draft.description);
    println!("tickets:");
    for (index, tier) in draft.tiers.iter().enumerate() {
        println!(
            "  [{index}] {} price={} qty={} {}",
            tier.name, tier.price, tier.quantity, tier.description
        );
    }
    println!("media:");
    for (index, item) in draft.media.items().iter().enumerate() {
        let cover = if index == 0 { " (cover)" } else { "" };
        println!("  [{index}] {:?} {}{cover}", item.kind, item.url());
    }
}

async fn host(app: &App, action: HostAction) -> anyhow::Result<()> {
    let api = app.user_api()?;
    let value = match action {
        HostAction::Stats => api.host().stats().await.context("failed to load stats")?,
        HostAction::Activity => api
            .host()
            .recent_activity()
            .await
            .context("failed to load recent activity")?,
        HostAction::Chart { range } => api
            .host()
            .chart(range.as_deref())
            .await
            .context("failed to load chart data")?,
        HostAction::TrustScore => api
            .host()
            .trust_score()
            .await
            .context("failed to load trust score")?,
    };
    print_json(&value)
}

async fn wallet(app: &App, action: WalletAction) -> anyhow::Result<()> {
    let api = app.user_api()?;
    match action {
        WalletAction::SetPin { pin, confirm } => {
            console::pin::create(&api, &pin, &confirm).await?;
            println!("Transaction PIN created");
            Ok(())
        }
        WalletAction::Limit { event_id } => {
            let limit = api
                .host()
                .withdrawal_limit(&event_id)
                .await
                .context("failed to load withdrawal limit")?;
            print_json(&limit)
        }
        WalletAction::Withdraw { event_id, amount } => {
            if amount <= 0.0 {
                bail!("amount must be positive");
            }
            let response = api
                .host()
                .request_withdrawal(&event_id, amount)
                .await
                .map_err(|err| anyhow!(err.message_or("Withdrawal failed").to_string()))?;
            print_json(&response)
        }
    }
}

async fn tickets(app: &App, action: TicketsAction) -> anyhow::Result<()> {
    let api = app.user_api()?;
    match action {
        TicketsAction::Refund { ticket_id } => {
            let confirmation = Confirmation {
                title: "Refund Ticket".to_string(),
                message: "Are you sure you want to refund this ticket?".to_string(),
                destructive: true,
            };
            if !app.confirm(&confirmation)? {
                println!("Cancelled");
                return Ok(());
            }
            let response = api
                .host()
                .refund_ticket(&ticket_id)
                .await
                .map_err(|err| anyhow!(err.message_or("Refund failed").to_string()))?;
            print_json(&response)
        }
    }
}

async fn kyc(app: &App, action: KycAction) -> anyhow::Result<()> {
    let api = app.user_api()?;
    match action {
        KycAction::Config => {
            let widget = api
                .kyc()
                .widget_config()
                .await
                .context("failed to load verification settings")?;
            print_json(&widget)
        }
        KycAction::Complete { result } => {
            let raw = std::fs::read_to_string(&result)
                .with_context(|| format!("failed to read {}", result.display()))?;
            let widget_result: Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", result.display()))?;
            let mut session = app.user_session();
            match console::kyc::complete(&api, &mut session, &widget_result).await? {
                Some(user) => {
                    app
                        .store
                        .update(|config| config.user = Some(user))
                        .context("failed to store verified user")?;
                    println!("Verification complete");
                }
                None => println!("Verification was not accepted"),
            }
            Ok(())
        }
    }
}

async fn admin(app: &App, action: AdminAction) -> anyhow::Result<()> {
    let api = app.admin_api()?;
    let admin = api.admin();
    match action {
        AdminAction::Events { action } => match action {
            AdminEventsAction::List { page } => {
                let events = admin.events(page).await.context("failed to load events")?;
                for event in &events.data {
                    println!("{}\t{}\t{}", event.id, event.status, event.title);
                }
                let meta = events.page_meta();
                println!("page {} of {}", meta.current_page, meta.last_page.max(1));
            }
            AdminEventsAction::Approve { id } => {
                print_json(&admin.approve_event(&id).await.context("approve failed")?)?;
            }
            AdminEventsAction::Reject { id } => {
                print_json(&admin.reject_event(&id).await.context("reject failed")?)?;
            }
            AdminEventsAction::Delete { id } => {
                if app.confirm(&EventAction::Delete.confirmation())? {
                    print_json(&admin.delete_event(&id).await.context("delete failed")?)?;
                } else {
                    println!("Cancelled");
                }
            }
        },
        AdminAction::Users { page } => {
            let users = admin.users(page).await.context("failed to load users")?;
            print_json(&users.data)?;
        }
        AdminAction::Support { action } => match action {
            SupportAction::List { page } => {
                let tickets = admin
                    .support_tickets(page)
                    .await
                    .context("failed to load support tickets")?;
                for ticket in &tickets.data {
                    println!(
                        "{}\t{}\t{}",
                        ticket.id,
                        ticket.status,
                        ticket.subject.as_deref().unwrap_or("")
                    );
                }
            }
            SupportAction::Show { id } => {
                let ticket = admin
                    .support_ticket(&id)
                    .await
                    .context("failed to load ticket")?;
                print_json(&ticket)?;
            }
            SupportAction::Reply { id, message } => {
                support::reply(&api, &id, &message).await?;
                println!("Reply sent");
            }
            SupportAction::Status { id, transition } => {
                if app.confirm(&transition.confirmation())? {
                    transition.apply(&api, &id).await?;
                    println!("Ticket marked as {}", transition.target_status());
                } else {
                    println!("Cancelled");
                }
            }
        },
        AdminAction::Trust { action } => match action {
            TrustAction::Tiers => print_json(&admin.trust_tiers().await?)?,
            TrustAction::SetTier {
                index,
                field,
                value,
            } => {
                let mut tiers = admin.trust_tiers().await.context("failed to load tiers")?;
                trust::set_tier_field(&mut tiers, index, &field, &value)?;
                admin
                    .update_trust_tiers(&tiers)
                    .await
                    .map_err(|err| anyhow!(err.message_or("Failed to save tiers").to_string()))?;
                print_json(&admin.trust_tiers().await?)?;
            }
            TrustAction::Settings => print_json(&admin.trust_settings().await?)?,
            TrustAction::Set { key, value } => {
                let mut settings = admin
                    .trust_settings()
                    .await
                    .context("failed to load settings")?;
                trust::set_setting(&mut settings, &key, &value)?;
                admin.update_trust_settings(&settings).await.map_err(|err| {
                    anyhow!(err.message_or("Failed to save settings").to_string())
                })?;
                print_json(&admin.trust_settings().await?)?;
            }
        },
        AdminAction::Finance { action } => match action {
            FinanceAction::Stats => print_json(&admin.finance_stats().await?)?,
            FinanceAction::Payouts { page } => {
                let payouts = admin.payouts(page).await.context("failed to load payouts")?;
                print_json(&payouts.data)?;
            }
            FinanceAction::Process { id } => {
                print_json(&admin.process_payout(&id).await.context("process failed")?)?;
            }
            FinanceAction::Reject { id } => {
                let confirmation = Confirmation {
                    title: "Reject Payout".to_string(),
                    message: "Are you sure you want to reject this payout?".to_string(),
                    destructive: true,
                };
                if app.confirm(&confirmation)? {
                    print_json(&admin.reject_payout(&id).await.context("reject failed")?)?;
                } else {
                    println!("Cancelled");
                }
            }
        },
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
