use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use thompson_engine::{normal_form, seminormal_form, Abelianization, Word, WordStats};
use tracing::{debug, info};
use word_reader::{read_csv, read_json_lines, NamedWord};

/// Computes normal forms of words in Thompson's group F.
///
/// Words are read as lists of `[index, exponent]` pairs and one JSON object
/// is printed per word.
#[derive(Debug, Parser)]
#[command(name = "thompson", version)]
pub struct Args {
    /// Input file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Layout of the input
    #[arg(short, long, value_enum, default_value_t = InputFormat::Json)]
    pub format: InputFormat,

    /// Emit the seminormal form instead of the normal form
    #[arg(long)]
    pub seminormal: bool,

    /// Cross-check every result before printing it
    #[arg(long)]
    pub verify: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One word per line: `[[1,1],[2,-1]]` or `{"id": ..., "word": [...]}`
    Json,
    /// `word,index,exponent` header, one letter per row
    Csv,
}

/// Which reduction a result went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Normal,
    Seminormal,
}

/// JSON output structure for each word
#[derive(Debug, Serialize)]
pub struct WordOutput {
    pub id: String,
    pub form: Form,
    pub input_len: usize,
    pub word: Word,
    pub rendered: String,
    pub abelianization: Abelianization,
}

/// Runs the CLI mode
pub fn run_cli(args: &Args) -> anyhow::Result<()> {
    let words = read_input(args)?;
    info!(words = words.len(), "read input");

    let form = if args.seminormal {
        Form::Seminormal
    } else {
        Form::Normal
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for named in words {
        let output = process_word(named, form, args.verify)?;
        serde_json::to_writer(&mut out, &output)?;
        writeln!(out)?;
    }
    Ok(())
}

fn read_input(args: &Args) -> anyhow::Result<Vec<NamedWord>> {
    let reader: Box<dyn BufRead> = if args.input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("cannot open {}", args.input.display()))?;
        Box::new(BufReader::new(file))
    };

    let words = match args.format {
        InputFormat::Json => read_json_lines(reader),
        InputFormat::Csv => read_csv(reader),
    };
    words.with_context(|| format!("cannot read words from {}", args.input.display()))
}

/// Reduces one word and, if asked, checks the result.
///
/// Verification compares the abelianization of input and result, checks the
/// block structure, and for normal forms also checks that reducing again
/// changes nothing.
pub fn process_word(named: NamedWord, form: Form, verify: bool) -> anyhow::Result<WordOutput> {
    let NamedWord { id, word } = named;
    let input_len = word.len();
    let before = WordStats::from_word(&word);

    let result = match form {
        Form::Normal => normal_form(word),
        Form::Seminormal => Word::from_terms(seminormal_form(word.into_terms())),
    };
    let after = WordStats::from_word(&result);
    debug!(%id, input_len, output_len = result.len(), "reduced word");

    if verify {
        if before.abelianization != after.abelianization {
            bail!(
                "word {}: abelianization changed from {:?} to {:?}",
                id,
                before.abelianization,
                after.abelianization
            );
        }
        if !result.is_seminormal() {
            bail!("word {}: result {} is not seminormal", id, result);
        }
        if form == Form::Normal && normal_form(result.clone()) != result {
            bail!("word {}: normal form {} is not a fixed point", id, result);
        }
    }

    Ok(WordOutput {
        id,
        form,
        input_len,
        rendered: result.to_string(),
        word: result,
        abelianization: after.abelianization,
    })
}
