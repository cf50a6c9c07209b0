use std::convert::Infallible;

use clap::Parser;

use symdiff_rs::exprs::Exprs;
use symdiff_rs::node::Value;

#[derive(Debug, Parser)]
#[command(author, version, about = "Differentiate x^(2^n) built by repeated squaring")]
struct Cli {
    /// Number of squarings.
    #[arg(value_name = "INT", default_value = "20")]
    depth: usize,

    /// Variable to differentiate with respect to.
    #[clap(long, default_value = "x")]
    var: String,

    /// Log level.
    #[clap(long, default_value = "info")]
    log_level: simplelog::LevelFilter,

    /// Print the rendered derivative (only sensible for small depths).
    #[clap(long)]
    print: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let time_total = std::time::Instant::now();

    let exprs = Exprs::default();
    let x = exprs.symbol("x")?;
    let mut e = x;
    for _ in 0..args.depth {
        e = exprs.mul(e, e);
    }
    println!("expression: {} nodes, tree size 2^{} - 1", exprs.len(), args.depth + 1);

    let time_diff = std::time::Instant::now();
    let d = exprs.differentiate(e, &args.var)?;
    println!("derivative computed in {:.3}s", time_diff.elapsed().as_secs_f64());
    println!("exprs = {:?}", exprs);

    match d {
        Value::Number(n) => println!("derivative = {}", n),
        Value::Expr(root) => {
            let (_, stats) = exprs.reduce_with_stats(root, |_, _: &[()], _| Ok::<_, Infallible>(()), &())?;
            println!("derivative: {} distinct nodes, max stack {}", stats.steps, stats.max_stack);
            if args.print {
                println!("derivative = {}", exprs.render(root));
            }
        }
    }

    println!("Total time: {:.3}s", time_total.elapsed().as_secs_f64());
    Ok(())
}
