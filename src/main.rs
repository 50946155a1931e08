use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::error;
use tabled::{Table, Tabled};
use zhuyin_braille::{
    check::{TestResult, check_yaml},
    render, CustomRuleSet, Dictionary, DictionaryError, Mode, PhraseCorrections, Transcript,
    Translator,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Notation {
    Traditional,
    Ueb,
    Nemeth,
}

#[derive(Debug, Args)]
struct TranslationArgs {
    /// Braille notation for literary text (nemeth adds math)
    #[arg(short, long, value_enum, default_value_t = Notation::Ueb)]
    mode: Notation,
    /// Do not enclose math in the opening and closing Nemeth indicators
    #[arg(long)]
    no_indicators: bool,
    /// File with custom rules, one `trigger=replacement` per line
    #[arg(short, long)]
    rules: Option<PathBuf>,
    /// Dictionary of Bopomofo readings, searched in ZHUYIN_TABLE_PATH
    #[arg(short, long, default_value = "zhuyin.txt")]
    dictionary: PathBuf,
    /// String to translate
    input: String,
}

impl TranslationArgs {
    fn mode(&self) -> Mode {
        match self.mode {
            Notation::Traditional => Mode::Traditional,
            Notation::Ueb => Mode::Ueb,
            Notation::Nemeth => Mode::Nemeth {
                indicators: !self.no_indicators,
            },
        }
    }

    fn rules(&self) -> Result<CustomRuleSet, std::io::Error> {
        match &self.rules {
            Some(path) => Ok(CustomRuleSet::parse(&fs::read_to_string(path)?)),
            None => Ok(CustomRuleSet::new()),
        }
    }

    fn dictionary(&self) -> Result<Dictionary, DictionaryError> {
        match Dictionary::find(&self.dictionary) {
            Err(DictionaryError::NotFound(path)) => {
                error!("Dictionary {:?} not found, only phrase corrections are known", path);
                Ok(Dictionary::new(HashMap::new(), PhraseCorrections::builtin()))
            }
            result => result,
        }
    }

    fn translate(&self) -> Result<Transcript, Box<dyn std::error::Error>> {
        let dictionary = self.dictionary()?;
        let rules = self.rules()?;
        let translator = Translator::new(self.mode(), &dictionary);
        Ok(translator.translate(&self.input, &rules))
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// translate <INPUT> to Braille
    #[command(arg_required_else_help = true)]
    Translate {
        #[command(flatten)]
        args: TranslationArgs,
    },
    /// show which part of <INPUT> produced which Braille
    #[command(arg_required_else_help = true)]
    Trace {
        #[command(flatten)]
        args: TranslationArgs,
    },
    /// print an HTML page with <INPUT> and its Braille side by side
    #[command(arg_required_else_help = true)]
    Render {
        #[command(flatten)]
        args: TranslationArgs,
        /// Number of cells after which a line is broken
        #[arg(long, default_value_t = 32)]
        cells_per_line: usize,
        /// Font size of the Braille in pixels
        #[arg(long, default_value_t = 22)]
        font_size: u32,
    },
    /// Run the tests defined in the <YAML_TEST_FILES>. Return 0 if all
    /// tests pass or 1 if any of the tests fail.
    CheckYaml {
        /// YAML files listing the tests
        #[arg(required = true)]
        yaml: Vec<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[command(name = "zhuyin")]
#[command(about = "A command line tool to translate Chinese, English and math to Braille")]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Tabled)]
struct TraceRow {
    #[tabled(rename = "Input")]
    source: String,
    #[tabled(rename = "Braille")]
    cells: String,
    #[tabled(rename = "Error")]
    error: &'static str,
}

fn trace(transcript: &Transcript) -> String {
    let rows = transcript.records().iter().map(|record| TraceRow {
        source: record.source.escape_debug().to_string(),
        cells: record.cells.escape_debug().to_string(),
        error: if record.is_error { "✗" } else { "" },
    });
    Table::new(rows).to_string()
}

fn check(paths: &[PathBuf]) -> bool {
    let mut results = Vec::new();
    for path in paths {
        println!("Testing with {:?}", path);
        match check_yaml(path) {
            Ok(r) => results.extend(r),
            Err(e) => {
                error!("{:?}: {}", path, e);
                return false;
            }
        }
    }
    for result in &results {
        if let TestResult::Failure {
            input,
            expected,
            actual,
        } = result
        {
            println!("Failure: {:?} expected {:?}, got {:?}", input, expected, actual);
        }
    }
    let failures = results.iter().filter(|r| r.is_failure()).count();
    println!("Pass: {}", results.iter().filter(|r| r.is_success()).count());
    println!("Fail: {}", failures);
    println!(
        "Expected failures: {}",
        results.iter().filter(|r| r.is_expected_failure()).count()
    );
    println!(
        "Unexpected successes: {}",
        results.iter().filter(|r| r.is_unexpected_success()).count()
    );
    failures == 0
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    let result = match args.command {
        Commands::Translate { args } => args.translate().map(|t| println!("{}", t.braille())),
        Commands::Trace { args } => args.translate().map(|t| println!("{}", trace(&t))),
        Commands::Render {
            args,
            cells_per_line,
            font_size,
        } => args
            .translate()
            .map(|t| print!("{}", render::document(t.records(), cells_per_line, font_size))),
        Commands::CheckYaml { yaml } => {
            return if check(&yaml) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
