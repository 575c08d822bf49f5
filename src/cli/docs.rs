//! The `docs` command: bundled README and LICENSE

use anyhow::Result;
use serde::Serialize;

use super::output::Output;

const README: &str = include_str!("../../README.md");
const LICENSE: &str = include_str!("../../LICENSE");

#[derive(Serialize)]
struct DocsOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    readme: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<&'a str>,
}

pub fn run(license: bool, readme: bool, output: &Output) -> Result<()> {
    if !license && !readme {
        output.success("Pass --readme and/or --license to show the bundled documents");
        return Ok(());
    }

    if output.is_json() {
        output.data(&DocsOutput {
            readme: readme.then_some(README),
            license: license.then_some(LICENSE),
        });
        return Ok(());
    }

    if readme {
        output.raw(README);
    }
    if license {
        if readme {
            println!();
        }
        output.raw(LICENSE);
    }
    Ok(())
}
