fn main() {
    if let Err(err) = event_host_lib::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
