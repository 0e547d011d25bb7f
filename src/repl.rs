use std::io::{self, Write};

use calc_rs::{calculate, calculate_strict};

pub fn start(strict: bool) {
    loop {
        print!(">>");
        io::stdout().flush().unwrap();

        let mut input = String::new();

        let bytes_read = io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");
        if bytes_read == 0 {
            break;
        }

        if input.trim().is_empty() {
            continue;
        }

        let result = if strict {
            calculate_strict(&input)
        } else {
            calculate(&input)
        };

        match result {
            Ok(value) => println!("{}", value),
            Err(err) => println!("error: {}", err),
        }
    }
}
