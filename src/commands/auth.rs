// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::commands::{reports, today};
use crate::dashboard::Period;
use crate::form::RegisterForm;
use crate::navigation::{Navigator, DASHBOARD, LOGIN, REGISTER};
use anyhow::{anyhow, Result};

pub async fn register(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    app.visit(REGISTER);
    let form = RegisterForm {
        username: arg(sub, "username"),
        email: arg(sub, "email"),
        password: sub.get_one::<String>("password").cloned().unwrap_or_default(),
    };
    form.validate()?;
    let ack = app
        .session
        .register(&app.auth, form.username.trim(), form.email.trim(), &form.password)
        .await
        .map_err(|e| anyhow!(e.display_message(&e.to_string())))?;
    println!("{}", ack.message());
    println!("You can now run `fintrack login --username {}`.", form.username.trim());
    app.history.navigate(LOGIN, None);
    Ok(())
}

pub async fn login(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    // keep the return target of an earlier redirect to /login
    if app.history.current_path() != LOGIN {
        app.visit(LOGIN);
    }
    let username = arg(sub, "username");
    let password = sub.get_one::<String>("password").cloned().unwrap_or_default();
    let (session, target) = app
        .login(&username, &password)
        .await
        .map_err(|e| anyhow!(e.login_message()))?;
    println!("Logged in as {}", session.username);
    if target == DASHBOARD {
        reports::show_dashboard(app, Period::containing(today())).await?;
    }
    Ok(())
}

pub fn logout(app: &App) -> Result<()> {
    let who = app.session.current().map(|s| s.username);
    app.logout();
    match who {
        Some(u) => println!("Logged out {}", u),
        None => println!("Not logged in"),
    }
    Ok(())
}

pub fn whoami(app: &App) -> Result<()> {
    match app.session.current() {
        Some(s) => println!("{}", s.username),
        None => println!("Not logged in"),
    }
    Ok(())
}

fn arg(sub: &clap::ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
