use std::{env, fs::read_to_string, process::exit, rc::Rc};

use valirian::{
    ast::render::render,
    display_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    semantics::{reporter::Reporter, run_checks},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut force_print_tree = false;
    let mut file_path: Option<&str> = None;

    for arg in args.iter().skip(1) {
        if arg == "-f" || arg == "--force-tree" {
            force_print_tree = true;
        } else if file_path.is_none() {
            file_path = Some(arg);
        } else {
            eprintln!("Usage: valirian [-f | --force-tree] <file>");
            exit(2);
        }
    }

    let file_path = match file_path {
        Some(path) => path,
        None => {
            eprintln!("Usage: valirian [-f | --force-tree] <file>");
            exit(2);
        }
    };

    let file_name = if file_path.contains('/') {
        file_path.split('/').next_back().unwrap_or(file_path)
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(2);
        }
    };

    let tokens = match tokenize(source.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, file_name);
            exit(1);
        }
    };

    let program = match parse(tokens, Rc::new(String::from(file_name))) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, file_name);
            exit(1);
        }
    };

    let mut reporter = Reporter::new(file_name);
    let error_count = run_checks(&program, &mut reporter);

    if error_count > 0 {
        println!("{} error(s) found", error_count);
    }

    if force_print_tree || error_count == 0 {
        print!("{}", render(&program));
    } else {
        println!("Errors found, not printing the tree.");
    }
}
