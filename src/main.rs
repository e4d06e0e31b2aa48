use std::path::PathBuf;

use crypto_app::screens::register;
use crypto_app::{CryptoApp, Navigator, Route};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  list | portfolio | settings     switch tab
  detail <coin-id>                open a coin
  refresh                         reload the coin list
  theme on|off                    toggle dark theme
  login <email> <password>
  register <email> <password> <confirm>
  login-screen | register-screen
  logout | back | help | quit";

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    crypto_app::logging::init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> crypto_app::Result<()> {
    let mut builder = CryptoApp::builder();
    if let Some(dir) = std::env::var_os("CRYPTO_APP_PREFS_DIR") {
        builder = builder.prefs_dir(PathBuf::from(dir));
    }
    let app = builder.build().await?;

    let mut auth_rx = app.auth().subscribe();
    let _ = auth_rx.wait_for(|s| !s.is_loading()).await;

    let mut nav = app.navigator();
    show(&app, &nav);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = words.split_first() else {
            continue;
        };

        match (cmd, args) {
            ("quit" | "exit", _) => break,
            ("help", _) => println!("{HELP}"),
            ("back", _) => {
                nav.pop();
            }
            ("list", _) => go_tab(&app, &mut nav, Route::List),
            ("portfolio", _) => go_tab(&app, &mut nav, Route::Portfolio),
            ("settings", _) => go_tab(&app, &mut nav, Route::Settings),
            ("detail", [id]) => go(&app, &mut nav, Route::Detail(id.to_string())),
            ("login-screen", _) => go(&app, &mut nav, Route::Login),
            ("register-screen", _) => go(&app, &mut nav, Route::Register),
            ("refresh", _) => {
                let handle = app.coin_list().refresh();
                println!("{}", app.render(&Route::List));
                let _ = handle.await;
                nav.switch_tab(Route::List);
            }
            ("theme", [flag]) => {
                let dark = matches!(*flag, "on" | "dark" | "true");
                app.settings().set_dark_theme(dark).await?;
            }
            ("login", [email, password]) => {
                app.auth().login_now(email, password).await;
                if app.auth().is_authenticated() {
                    nav.reset_for(true);
                }
            }
            ("register", [email, password, confirm]) => {
                if let Err(e) = register::validate(email, password, confirm) {
                    println!("{}", register::render(&app.auth().state(), Some(e)));
                    continue;
                }
                app.auth().register_now(email, password).await;
                if app.auth().is_authenticated() {
                    nav.reset_for(true);
                }
            }
            ("logout", _) => {
                app.auth().logout_now().await;
                if !app.auth().is_authenticated() && app.auth().state().is_success() {
                    nav.reset_for(false);
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
                continue;
            }
        }
        show(&app, &nav);
    }
    Ok(())
}

fn go(app: &CryptoApp, nav: &mut Navigator, route: Route) {
    if route.requires_auth() && !app.auth().is_authenticated() {
        println!("Please log in first.");
        return;
    }
    nav.push(route);
}

fn go_tab(app: &CryptoApp, nav: &mut Navigator, route: Route) {
    if !app.auth().is_authenticated() {
        println!("Please log in first.");
        return;
    }
    nav.switch_tab(route);
}

fn show(app: &CryptoApp, nav: &Navigator) {
    let route = nav.current();
    println!("== {route} ==");
    println!("{}", app.render(route));
}
