pub mod context;
pub mod contact_commands;
pub mod birthday_commands;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;
use crate::db;
use crate::error::{BookError, BookResult};
use crate::model::Directory;
use context::CliContext;

/// What every command handler returns: a reply, or an error to be turned
/// into one by `render`.
pub type CommandResult = BookResult<String>;

/// What the loop should do after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Reply(String),
    Silent,
    Exit,
}

/// Run the interactive REPL on stdin/stdout.
pub fn run(config: Config) -> BookResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(config, stdin.lock(), stdout.lock())
}

/// Run one session over arbitrary input and output. The book is loaded
/// before the first prompt and saved when the user leaves, whether by
/// `close`/`exit` or by ending the input.
pub fn run_session<R: BufRead, W: Write>(config: Config, mut input: R, mut output: W) -> BookResult<()> {
    let mut book = db::load(&config.book_file)?;
    let ctx = CliContext::new(config);

    writeln!(output, "Welcome to the assistant bot!")?;
    repl_loop(&ctx, &mut book, &mut input, &mut output)?;

    db::save(&book, &ctx.config.book_file)?;
    writeln!(output, "Good bye!")?;
    Ok(())
}

fn repl_loop<R: BufRead, W: Write>(
    ctx: &CliContext,
    book: &mut Directory,
    input: &mut R,
    output: &mut W,
) -> BookResult<()> {
    loop {
        let line = match read_line(input, output, "Enter a command: ")? {
            Some(s) => s,
            None => break,
        };

        match dispatch(ctx, book, &line) {
            Dispatch::Reply(text) => writeln!(output, "{}", text)?,
            Dispatch::Silent => {}
            Dispatch::Exit => break,
        }
    }
    Ok(())
}

/// Prompt and read a line. Returns None on EOF or unreadable input.
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> BookResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string())),
        Err(e) => {
            warn!(error = %e, "cannot read input, ending session");
            Ok(None)
        }
    }
}

/// Handles one line of input against the book.
pub fn dispatch(ctx: &CliContext, book: &mut Directory, input: &str) -> Dispatch {
    let (command, args) = match parse_input(input) {
        Some(parsed) => parsed,
        None => return Dispatch::Silent,
    };
    debug!(%command, ?args, "dispatching command");

    let result = match command.as_str() {
        "close" | "exit" => return Dispatch::Exit,
        "help" => Ok(help_text().to_string()),
        "hello" => contact_commands::hello(&args, book),
        "add" => contact_commands::add(&args, book),
        "change" => contact_commands::change(&args, book),
        "phone" => contact_commands::phone(&args, book),
        "all" => contact_commands::all(&args, book),
        "add-birthday" => birthday_commands::add_birthday(&args, book),
        "show-birthday" => birthday_commands::show_birthday(&args, book),
        "birthdays" => birthday_commands::birthdays(book, ctx.window_days(), CliContext::today()),
        _ => Ok("Invalid command.".to_string()),
    };

    Dispatch::Reply(render(result))
}

/// Turns a handler result into the text shown to the user.
pub fn render(result: CommandResult) -> String {
    match result {
        Ok(text) => text,
        Err(e) if e.is_user_error() => e.to_string(),
        Err(e) => {
            warn!(error = %e, "command failed");
            format!("Error: {}", e)
        }
    }
}

/// Splits input on whitespace; the command word is case-insensitive.
/// Returns None for blank input.
pub fn parse_input(input: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

/// The first `N` arguments of a command. Extra arguments are ignored.
pub fn take_args<'a, const N: usize>(command: &str, args: &[&'a str]) -> BookResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or_else(|| BookError::MissingArguments {
            command: command.to_string(),
            expected: N,
        })
}

fn help_text() -> &'static str {
    r#"COMMANDS:
  hello                          Greet the bot
  add <name> <phone>             Add a contact, or another phone to one
  change <name> <old> <new>      Replace one of a contact's phones
  phone <name>                   Show a contact's phones
  all                            Show every contact
  add-birthday <name> <date>     Set a birthday (DD.MM.YYYY)
  show-birthday <name>           Show a contact's birthday
  birthdays                      Show upcoming birthdays (next 7 days by default)
  help                           Show this help
  close / exit                   Save and quit"#
}
