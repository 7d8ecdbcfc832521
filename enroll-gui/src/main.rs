#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, process};

use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use enroll_ui::{component::text, font, theme};

use enroll_gui::{config::Config, gui::App, logger, VERSION};

#[derive(Debug, PartialEq)]
enum Arg {
    ApiUrl(String),
    Token(String),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: enroll [OPTIONS]

Options:
    --api-url <URL>     URL of the signup endpoint
    --token <TOKEN>     Bearer token for the signup endpoint
    -v, --version       Display enroll version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--api-url" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::ApiUrl(a.clone()));
            } else {
                return Err("missing arg to --api-url".into());
            }
        } else if arg == "--token" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::Token(a.clone()));
            } else {
                return Err("missing arg to --token".into());
            }
        } else if arg.starts_with("--") {
            // A "--" prefixed value following a flag is the flag's argument.
            let is_flag_value = i > 0 && (args[i - 1] == "--api-url" || args[i - 1] == "--token");
            if !is_flag_value {
                return Err(format!("unknown argument: {}", arg).into());
            }
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let mut api_url = None;
    let mut token = None;
    for arg in args {
        match arg {
            Arg::ApiUrl(url) => api_url = Some(url),
            Arg::Token(t) => token = Some(t),
        }
    }
    let config = Config::new(api_url, token);

    let log_level = logger::parse_log_level()?.unwrap_or(LevelFilter::INFO);
    logger::setup_logger(log_level)?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Enroll".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 700.0,
            height: 550.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 500.0,
            height: 450.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["--meth".into()]).is_err());
        assert!(parse_args(vec!["--api-url".into()]).is_err());
        assert!(parse_args(vec!["--token".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::ApiUrl("http://localhost:8080/signup".into())]),
            parse_args(vec![
                "--api-url".into(),
                "http://localhost:8080/signup".into()
            ])
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ApiUrl("http://localhost:8080/signup".into()),
                Arg::Token("secret".into())
            ]),
            parse_args(
                "--api-url http://localhost:8080/signup --token secret"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::Token("secret".into()),
                Arg::ApiUrl("http://localhost:8080/signup".into()),
            ]),
            parse_args(
                "--token secret --api-url http://localhost:8080/signup"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }
}
