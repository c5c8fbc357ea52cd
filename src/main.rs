// SPDX: CC0-1.0

use anyhow::Context;
use chrono::Local;
use coord_geom::{
    config::Config,
    report,
    session::Session,
    shell::{self, Reply, YesNo},
    style,
};
use std::{
    io::{stdin, stdout, BufWriter, Write},
    process::ExitCode,
};

fn main() -> ExitCode {
    env_logger::init();
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("unexpected error: {err}");
            let chain = err.chain();
            if chain.len() > 1 {
                eprintln!();
                eprintln!("context:");
                for it in chain.skip(1) {
                    eprintln!("  {it}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let config = Config::default();
    let mut src = stdin().lock();
    let mut stdout = BufWriter::new(stdout());

    style::banner(
        &mut stdout,
        "Welcome to the Coordinate Geometry Calculator",
        '!',
        '=',
    )?;
    writeln!(stdout)?;

    match shell::read_yes_no(&mut src, &mut stdout, "Have you used the program before? ")? {
        Reply::Value(YesNo::No) => style::instructions(&mut stdout)?,
        Reply::Value(YesNo::Yes) => {
            writeln!(stdout, "**** Program launched! ****")?;
            writeln!(stdout)?;
        }
        Reply::Cancel | Reply::Exit => {}
    }

    let mut session = Session::new();
    session.run(&mut src, &mut stdout, &config)?;
    style::ending(&mut stdout)?;

    let table = session.into_table();
    report::export(&table, &config, &mut stdout)?;

    writeln!(stdout)?;
    writeln!(stdout, "{}", config.separator())?;
    writeln!(
        stdout,
        "Session ended {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    report::write_table(&table, &mut stdout).context("failed to print results table")?;
    stdout.flush()?;
    Ok(())
}
