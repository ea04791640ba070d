// freshcheck CLI entry point

use freshcheck_cli::{logging::VerbosityLevel, output, router::CommandRouter};

#[tokio::main]
async fn main() {
    // A missing .env file is normal; the key may come from the real environment.
    let _ = dotenv::dotenv();

    if let Err(e) = CommandRouter::route().await {
        output::print_error(&e.report(VerbosityLevel::current()));
        std::process::exit(1);
    }
}
