use std::{env, process::exit};

use classlang::{
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: classlang {{tokenize|parse}} <words...>");
        exit(1);
    }

    // Each word gets a trailing space so adjacent identifiers from
    // separate arguments do not run together.
    let mut source = String::new();
    for word in &args[2..] {
        source.push_str(word);
        source.push(' ');
    }

    match args[1].as_str() {
        "tokenize" => {
            let mut lexer = Lexer::new(source.clone(), None);

            loop {
                match lexer.next() {
                    Ok(token) => {
                        if token.kind == TokenKind::EOF {
                            break;
                        }
                        println!("{}", token);
                    }
                    Err(error) => {
                        display_error(error, &source);
                        exit(1);
                    }
                }
            }
        }
        "parse" => {
            let lexer = Lexer::new(source.clone(), None);

            match parse(lexer) {
                Ok(expr) => println!("{:#?}", expr),
                Err(error) => {
                    display_error(error, &source);
                    exit(1);
                }
            }
        }
        other => {
            eprintln!("Unsupported subcommand: {}", other);
            exit(1);
        }
    }
}
