fn main() {
    if let Err(e) = shadescope_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
