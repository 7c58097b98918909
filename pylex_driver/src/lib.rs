use std::{
    cell::Cell,
    fmt::Display,
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use pylex_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::SourceFile,
};
use pylex_lexical::{
    table,
    token::{Token, TokenKind},
    token_stream::TokenStream,
};
use strum::IntoEnumIterator;

/// The width of the rules framing the token listing.
const RULE_WIDTH: usize = 45;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "pylex",
    about = "Lexical analyzer for a small Python-like language.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The source file to analyze.
    pub file: PathBuf,

    /// Prints out how many tokens of each kind were found.
    #[clap(long)]
    pub summary: bool,
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(false),
        }
    }

    fn has_printed(&self) -> bool { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Displays a token as a line of the token listing.
///
/// Lexemes found in the fixed tables are repeated after the description.
#[derive(Debug, Clone, Copy)]
struct Listed<'a>(&'a Token);

impl Display for Listed<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lexeme = self.0.lexeme();
        write!(f, "{lexeme} - {}", self.0.kind().description())?;

        if table::is_annotated(lexeme) {
            write!(f, " {lexeme}")?;
        }

        Ok(())
    }
}

/// Counts the tokens of each kind, leaving out the kinds that never occurred.
fn summarize(tokens: &[Token]) -> Vec<(TokenKind, usize)> {
    TokenKind::iter()
        .map(|kind| {
            (
                kind,
                tokens.iter().filter(|token| token.kind() == kind).count(),
            )
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn load(path: &Path) -> Option<Arc<SourceFile>> {
    let result = File::open(path)
        .map_err(|error| error.to_string())
        .and_then(|file| {
            SourceFile::load(file, path.to_path_buf()).map_err(|error| error.to_string())
        });

    match result {
        Ok(source_file) => Some(source_file),
        Err(error) => {
            let msg = Message::new(Severity::Error, format!("{}: {error}", path.display()));

            eprintln!("{msg}");
            None
        }
    }
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let Some(source_file) = load(&argument.file) else {
        return ExitCode::FAILURE;
    };

    println!(
        "{}",
        Message::new(
            Severity::Info,
            format!("analyzing {}", argument.file.display())
        )
    );

    let printer = Printer::new();
    let rule = "-".repeat(RULE_WIDTH);

    // token stream, listed as the tokens are produced
    println!("{rule}");
    let token_stream = TokenStream::tokenize_with(&source_file, &printer, |token| {
        println!("{}", Listed(token));
    });
    println!("{rule}");

    // early exit
    if printer.has_printed() {
        return ExitCode::FAILURE;
    }

    if argument.summary {
        for (kind, count) in summarize(&token_stream) {
            println!("{:<24} {count}", kind.description());
        }
        println!("{rule}");
    }

    println!(
        "{}",
        Message::new(
            Severity::Info,
            format!("analysis complete, {} tokens found", token_stream.len())
        )
    );

    ExitCode::SUCCESS
}
