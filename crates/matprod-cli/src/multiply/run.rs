//! Load both operands, multiply them, then print or save the result.
use anyhow::{Context, Result};

use matprod::io::{read_matrix_with_config, write_matrix_with_config};
use matprod::{multiply, Matrix};

use super::input::MultiplyConfig;

pub fn run_multiply(config: &MultiplyConfig) -> Result<Matrix> {
    let a = read_matrix_with_config(&config.a, &config.matrix_config(&config.a))?;
    let b = read_matrix_with_config(&config.b, &config.matrix_config(&config.b))?;

    let result = multiply(&a, &b, config.overflow)
        .with_context(|| format!("Cannot multiply {} by {}", config.a, config.b))?;
    log::info!(
        "[matprod] {} x {} -> {} result",
        a.shape(),
        b.shape(),
        result.shape()
    );

    match &config.output {
        None => {
            println!("Matrix a looks like:");
            print!("{}", a);
            println!("Matrix b looks like:");
            print!("{}", b);
            println!("Result looks like:");
            print!("{}", result);
        }
        Some(output) => {
            let output_config = config.matrix_config(output);
            if let Err(e) = write_matrix_with_config(output, &result, &output_config) {
                println!("The result matrix looks like:");
                print!("{}", result);
                return Err(e.context("I couldn't write the result file"));
            }
        }
    }

    Ok(result)
}
