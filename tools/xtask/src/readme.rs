use std::env;
use std::fs;
use std::process;

use anyhow::Context;
use anyhow::Result;

fn cmd(args: Vec<&str>) -> Result<String> {
    let mut child = process::Command::new("./target/debug/servdeck");
    for arg in args {
        child.arg(arg);
    }

    for (key, _) in env::vars() {
        if key.starts_with("SERVDECK_") {
            child.env(key, "");
        }
    }

    return Ok(String::from_utf8(child.env("NO_COLOR", "1").output()?.stdout)?);
}

fn replace_section(readme: &mut String, marker: &str, body: &str) -> Result<()> {
    let start_tag = format!("<!-- {marker} start -->");
    let end_tag = format!("<!-- {marker} end -->");
    let start = readme
        .find(&start_tag)
        .with_context(|| return format!("README.md is missing {start_tag}"))?;
    let end = readme
        .find(&end_tag)
        .with_context(|| return format!("README.md is missing {end_tag}"))?;

    readme.replace_range(start..end, &format!("{start_tag}\n```\n{body}\n```\n"));
    return Ok(());
}

pub fn update() -> Result<()> {
    let output_help = cmd(vec!["--help"])?;
    let output_config = cmd(vec!["config", "--help"])?
        .split("Options:")
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    let mut readme = fs::read_to_string("./README.md")?;
    replace_section(&mut readme, "command-help", output_help.trim_end())?;
    replace_section(&mut readme, "command-config", &output_config)?;

    if let Ok(home) = env::var("HOME") {
        readme = readme.replace(&home, "~");
    }

    fs::write("./README.md", readme)?;
    return Ok(());
}
