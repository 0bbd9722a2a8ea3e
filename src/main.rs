use anyhow::{Context, Result, bail};
use school_admin::{
    AppState,
    config::Config,
    guard::{Decision, Guard, check_all},
    navigation::menu::{find_item, visible_menu},
    resources::student::StudentFilter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str =
    "usage: school-admin <login EMAIL | logout | whoami | menu | check PATH | students>";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("API_URL must be set")?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or_default();

    let state = AppState::from_config(config).await?;

    match command {
        "login" => {
            let email = args.get(1).context(USAGE)?;
            let password = std::env::var("SCHOOL_ADMIN_PASSWORD")
                .context("SCHOOL_ADMIN_PASSWORD must be set")?;
            let user = state.auth.login(email, &password).await?;
            println!("Signed in as {} ({:?})", user.email, user.user_type);
        }
        "logout" => {
            state.auth.logout().await;
            println!("Signed out");
        }
        "whoami" => match state.session.current_user() {
            Some(user) => {
                let roles: Vec<_> = user.roles.iter().map(String::as_str).collect();
                println!("{} [{}] until {}", user.email, roles.join(", "), user.expires_at);
            }
            None => println!("Not signed in"),
        },
        "menu" => {
            for group in visible_menu(&state.session.snapshot()) {
                println!("{}", group.label);
                for item in group.items {
                    println!("  {:<20} {}", item.label, item.route);
                }
            }
        }
        "check" => {
            let path = args.get(1).context(USAGE)?;
            let mut guards = vec![Guard::Authenticated];
            if let Some(item) = find_item(path).filter(|item| !item.roles.is_empty()) {
                guards.push(Guard::any_role(item.roles.iter().copied()));
            }
            match check_all(&guards, &state.session.snapshot(), path) {
                Decision::Allow => println!("allowed"),
                Decision::Redirect(redirect) => println!("redirect {}", redirect.to_url()),
            }
        }
        "students" => {
            let students = state.students().list(&StudentFilter::default()).await?;
            for student in students {
                println!(
                    "{:<12} {:<30} {}",
                    student.roll_number,
                    student.full_name(),
                    student.class_section_name
                );
            }
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
