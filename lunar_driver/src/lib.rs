//! Runs the scanner from the command line and dumps the resulting tokens.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links
)]

use std::{cell::Cell, fmt::Display, fs::File, path::PathBuf, process::ExitCode, sync::Arc};

pub use clap::Parser;
use lunar_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use lunar_lexical::{token::Token, token_stream::TokenStream};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "lunar",
    about = "Tokenizes a Lua-like script and prints one token per line.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file to tokenize; the standard input is read when omitted.
    pub file: Option<PathBuf>,
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

/// Is a struct implementing [`Display`] that renders a token stream as one `[TAG] lexeme` line
/// per token.
///
/// `[EOL]` lines carry no lexeme and the final end-of-file token isn't printed.
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    /// The token stream to render.
    pub token_stream: &'a TokenStream,
}

impl<'a> Display for Dump<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in self.token_stream.significant_tokens() {
            match token {
                Token::EndOfLine(..) => writeln!(f, "{}", token.tag())?,
                token => writeln!(f, "{} {}", token.tag(), token.span().str())?,
            }
        }

        Ok(())
    }
}

fn report(path: impl Display, error: impl Display) -> ExitCode {
    let msg = Message::new(Severity::Error, format!("{path}: {error}"));

    eprintln!("{msg}");
    ExitCode::FAILURE
}

fn load(argument: &Argument) -> Result<Arc<SourceFile>, ExitCode> {
    let Some(path) = &argument.file else {
        let content =
            std::io::read_to_string(std::io::stdin()).map_err(|error| report("<stdin>", error))?;

        return SourceFile::temp_with_path(content, Some(PathBuf::from("<stdin>")))
            .map_err(|error| report("<stdin>", error));
    };

    let file = File::open(path).map_err(|error| report(path.display(), error))?;

    SourceFile::load(file, path.clone()).map_err(|error| match error {
        source_file::Error::IoError(error) => report(path.display(), error),
        source_file::Error::Utf8Error(error) => report(path.display(), error),
    })
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let source_file = match load(argument) {
        Ok(source_file) => source_file,
        Err(exit_code) => return exit_code,
    };

    let printer = Printer::new();

    let Ok(token_stream) = TokenStream::tokenize(&source_file, &printer) else {
        return ExitCode::FAILURE;
    };

    // lexical errors abort tokenizing, so a stream only comes back when nothing was printed
    debug_assert!(!printer.has_printed());

    print!(
        "{}",
        Dump {
            token_stream: &token_stream
        }
    );

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests;
