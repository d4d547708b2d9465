use std::{
    env,
    fs::{self, read_to_string},
    path::{Path, PathBuf},
    process::exit,
    time::Instant,
};

use lazy_static::lazy_static;
use regex::Regex;
use slang::{
    display_error,
    lexer::{lexer::tokenize, rules::DEFAULT_RULES},
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

lazy_static! {
    static ref PROJECT_NAME: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_-]*$").unwrap();
}

const USAGE: &str = "\
slang - simple and fast 'cross-language' general purpose programming language

Usage:
  slang lex <file>      Tokenize a file and print the token stream
  slang parse <file>    Parse a file and print its AST
  slang init [name]     Create/initialize a slang project";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("{}", USAGE);
        exit(1);
    }

    match args[1].as_str() {
        "lex" => {
            let file = expect_file_argument(&args);
            lex_command(&file);
        }
        "parse" => {
            let file = expect_file_argument(&args);
            parse_command(&file);
        }
        "init" => {
            let name = args.get(2).map(String::as_str).unwrap_or("slang-project");
            init_command(name);
        }
        other => {
            println!("Unknown command `{}`\n\n{}", other, USAGE);
            exit(1);
        }
    }
}

fn expect_file_argument(args: &[String]) -> PathBuf {
    match args.get(2) {
        Some(file) => PathBuf::from(file),
        None => {
            println!("{}", USAGE);
            exit(1);
        }
    }
}

fn lex_command(file: &Path) {
    let source = read_to_string(file).expect("Failed to read file!");

    let result = tokenize(&source, &DEFAULT_RULES);

    if !result.tokens.is_empty() {
        println!("== Tokens ==");
        for token in &result.tokens {
            println!("- {}", token);
        }
    }

    if !result.errors.is_empty() {
        println!("== Errors ==");
        for error in &result.errors {
            display_error(error, file);
        }
        exit(1);
    }
}

fn parse_command(file: &Path) {
    let source = read_to_string(file).expect("Failed to read file!");

    let start = Instant::now();
    let lexed = tokenize(&source, &DEFAULT_RULES);

    if !lexed.errors.is_empty() {
        for error in &lexed.errors {
            display_error(error, file);
        }
        exit(1);
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (parser, result) = parse(lexed.tokens);

    let ast = match result {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, file);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    for error in &parser.errors {
        display_error(error, file);
    }

    let check_start = Instant::now();
    let (_, check_error) = type_check(&ast);

    if let Some(error) = check_error {
        display_error(&error, file);
        exit(1);
    }

    println!("Checked in {:?}", check_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    println!("{:#?}", ast);
}

fn init_command(name: &str) {
    if !PROJECT_NAME.is_match(name) {
        println!(
            "`{}` is not a valid project name (letters, digits, `_` and `-`, not starting with a digit)",
            name
        );
        exit(1);
    }

    let root = PathBuf::from(name);
    if root.exists() {
        println!("`{}` already exists", name);
        exit(1);
    }

    fs::create_dir(&root).expect("Failed to create project directory!");

    let manifest = format!("[project]\nname = \"{}\"\nversion = \"0.0.0\"\n", name);
    fs::write(root.join("slang.toml"), manifest).expect("Failed to write slang.toml!");

    let main = "func main(): i32 {\nreturn 0\n}\n";
    fs::write(root.join("main.slang"), main).expect("Failed to write main.slang!");

    println!("Created project `{}`", name);
}
