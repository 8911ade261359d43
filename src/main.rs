// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fintrack::{app::App, cli, commands, config::Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let config = Config::from_matches(&matches)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level())
        .with_target(false)
        .init();

    let app = App::open(config)?;

    let outcome = match matches.subcommand() {
        Some(("register", sub)) => commands::auth::register(&app, sub).await,
        Some(("login", sub)) => commands::auth::login(&app, sub).await,
        Some(("logout", _)) => commands::auth::logout(&app),
        Some(("whoami", _)) => commands::auth::whoami(&app),
        Some(("tx", sub)) => commands::transactions::handle(&app, sub).await,
        Some(("summary", sub)) => commands::reports::summary(&app, sub).await,
        Some(("by-category", sub)) => commands::reports::by_category(&app, sub).await,
        Some(("dashboard", sub)) => commands::reports::dashboard(&app, sub).await,
        _ => {
            cli::build_cli().print_help()?;
            println!();
            Ok(())
        }
    };
    outcome.map_err(commands::user_facing)
}
