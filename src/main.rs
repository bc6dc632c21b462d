use clap::Parser;
use gratitude::application::{Rejection, Session, SubmitOutcome};
use gratitude::cli::{help_text, render_view, Cli, SessionCommand};
use gratitude::domain::Language;
use gratitude::error::{GratitudeError, Result};
use gratitude::infrastructure::{logging, Config};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    logging::init(&config.log_level, cli.verbose)?;

    // Command-line language wins over the config file
    let language = match cli.language {
        Some(name) => Language::from_str(&name).map_err(GratitudeError::Config)?,
        None => config.language,
    };

    let mut session = Session::new(language);
    tracing::debug!(%language, "session started");
    print!("{}", render_view(&session));

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionCommand::from_str(&line) {
            Ok(command) => command,
            Err(e) => {
                // A typo should not end the session
                eprintln!("Error: {}", e);
                continue;
            }
        };

        session.poll_attachments();
        if !apply(&mut session, command)? {
            break;
        }
    }

    io::stdout().flush()?;
    Ok(())
}

/// Apply one command. Returns false when the session should end.
fn apply(session: &mut Session, command: SessionCommand) -> Result<bool> {
    match command {
        SessionCommand::New => {
            session.open_form();
            print!("{}", render_view(session));
        }
        SessionCommand::SetField(field, value) => session.update_field(field, value),
        SessionCommand::Image(path) => session.attach_image(path.as_deref()),
        SessionCommand::Wait => session.wait_for_attachment(),
        SessionCommand::Draw(points) => session.draw_stroke(&points),
        SessionCommand::Save => match session.submit()? {
            SubmitOutcome::Created(_) => print!("{}", render_view(session)),
            SubmitOutcome::Rejected(Rejection::AttachmentPending) => {
                println!("{}", session.texts().attachment_pending)
            }
            // Blank title or description: the form simply stays open
            SubmitOutcome::Rejected(Rejection::BlankField) => {}
        },
        SessionCommand::Cancel => {
            session.cancel();
            print!("{}", render_view(session));
        }
        SessionCommand::List => print!("{}", render_view(session)),
        SessionCommand::ToggleLanguage => {
            session.toggle_language();
            print!("{}", render_view(session));
        }
        SessionCommand::Help => print!("{}", help_text()),
        SessionCommand::Quit => return Ok(false),
    }

    Ok(true)
}
