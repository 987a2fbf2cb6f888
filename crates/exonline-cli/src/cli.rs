//! Command-line argument parsing.

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use exonline_core::{DateRange, Page};

pub const USAGE: &str = "\
Usage:
  exonline projects <account_id> [pg] [pgSize]
  exonline equipment <project_id> <dossier_ids> [date_from] [date_to] [pg] [pgSize]
  exonline attachments <project_id> <dossier_ids> [date_from] [date_to]

  dossier_ids  comma-separated, e.g. 1201,1202
  dates        YYYY-MM-DD; date_from defaults to 2010-01-01, use - to omit

Environment:
  EXO_KEY       API key (required)
  EXO_BASE_URL  API base URL override
  RUST_LOG      log filter, e.g. debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Projects {
        account_id: i64,
        page: Page,
    },
    Equipment {
        project_id: i64,
        dossier_ids: Vec<i64>,
        dates: DateRange,
        page: Page,
    },
    Attachments {
        project_id: i64,
        dossier_ids: Vec<i64>,
        dates: DateRange,
    },
    Help,
}

impl Command {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some(name) = args.first() else {
            return Ok(Command::Help);
        };
        let rest = &args[1..];

        match name.as_str() {
            "projects" => {
                let account_id = parse_id(required(rest, 0, "account_id")?, "account_id")?;
                let page = parse_page(rest, 1, Page::projects())?;
                Ok(Command::Projects { account_id, page })
            }
            "equipment" | "attachments" => {
                let project_id = parse_id(required(rest, 0, "project_id")?, "project_id")?;
                let dossier_ids = parse_id_list(required(rest, 1, "dossier_ids")?)?;
                let dates = DateRange::new(
                    match rest.get(2) {
                        Some(arg) => parse_date(arg)?,
                        None => Some(DateRange::default_from()),
                    },
                    rest.get(3).map(|arg| parse_date(arg)).transpose()?.flatten(),
                );
                if name == "equipment" {
                    Ok(Command::Equipment {
                        project_id,
                        dossier_ids,
                        dates,
                        page: parse_page(rest, 4, Page::equipment())?,
                    })
                } else {
                    Ok(Command::Attachments {
                        project_id,
                        dossier_ids,
                        dates,
                    })
                }
            }
            "help" | "-h" | "--help" => Ok(Command::Help),
            other => bail!("unknown command {other:?}"),
        }
    }
}

fn required<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing argument <{name}>"))
}

fn parse_id(arg: &str, name: &str) -> Result<i64> {
    arg.trim()
        .parse()
        .with_context(|| format!("invalid {name} {arg:?}"))
}

fn optional_u32(arg: Option<&String>, name: &str) -> Result<Option<u32>> {
    arg.map(|a| a.parse().with_context(|| format!("invalid {name} {a:?}")))
        .transpose()
}

/// `[pg] [pgSize]` starting at `index`, falling back to `defaults`.
fn parse_page(args: &[String], index: usize, defaults: Page) -> Result<Page> {
    Ok(Page::new(
        optional_u32(args.get(index), "pg")?.unwrap_or(defaults.number),
        optional_u32(args.get(index + 1), "pgSize")?.unwrap_or(defaults.size),
    ))
}

/// `"1, 2,3"` -> `[1, 2, 3]`; empty entries are ignored.
pub fn parse_id_list(arg: &str) -> Result<Vec<i64>> {
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_id(s, "dossier id"))
        .collect()
}

/// `-` means "no bound".
fn parse_date(arg: &str) -> Result<Option<NaiveDate>> {
    if arg == "-" {
        return Ok(None);
    }
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .map(Some)
        .with_context(|| format!("invalid date {arg:?}, expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(Command::parse(&[]).unwrap(), Command::Help);
        assert_eq!(Command::parse(&args(&["--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_projects_defaults() {
        let cmd = Command::parse(&args(&["projects", "311"])).unwrap();
        assert_eq!(
            cmd,
            Command::Projects {
                account_id: 311,
                page: Page::new(1, 100)
            }
        );

        let cmd = Command::parse(&args(&["projects", "311", "3", "25"])).unwrap();
        assert_eq!(
            cmd,
            Command::Projects {
                account_id: 311,
                page: Page::new(3, 25)
            }
        );
    }

    #[test]
    fn test_equipment_dates() {
        let cmd = Command::parse(&args(&["equipment", "17", "1,2,3"])).unwrap();
        assert_eq!(
            cmd,
            Command::Equipment {
                project_id: 17,
                dossier_ids: vec![1, 2, 3],
                dates: DateRange::default(),
                page: Page::new(1, 1000),
            }
        );

        let cmd =
            Command::parse(&args(&["attachments", "17", "4", "-", "2024-02-29"])).unwrap();
        assert_eq!(
            cmd,
            Command::Attachments {
                project_id: 17,
                dossier_ids: vec![4],
                dates: DateRange::new(None, NaiveDate::from_ymd_opt(2024, 2, 29)),
            }
        );
    }

    #[test]
    fn test_equipment_page() {
        let cmd = Command::parse(&args(&["equipment", "17", "1,2", "-", "-", "2", "50"])).unwrap();
        assert_eq!(
            cmd,
            Command::Equipment {
                project_id: 17,
                dossier_ids: vec![1, 2],
                dates: DateRange::new(None, None),
                page: Page::new(2, 50),
            }
        );

        let cmd = Command::parse(&args(&["equipment", "17", "1", "2020-01-01", "-", "4"])).unwrap();
        assert_eq!(
            cmd,
            Command::Equipment {
                project_id: 17,
                dossier_ids: vec![1],
                dates: DateRange::new(NaiveDate::from_ymd_opt(2020, 1, 1), None),
                page: Page::new(4, 1000),
            }
        );

        assert!(Command::parse(&args(&["equipment", "17", "1", "-", "-", "x"])).is_err());
    }

    #[test]
    fn test_id_list() {
        assert_eq!(parse_id_list("1, 2,,3").unwrap(), vec![1, 2, 3]);
        assert!(parse_id_list("1,x").is_err());
    }

    #[test]
    fn test_errors() {
        assert!(Command::parse(&args(&["projects"])).is_err());
        assert!(Command::parse(&args(&["equipment", "17"])).is_err());
        assert!(Command::parse(&args(&["equipment", "17", "1", "01/02/2020"])).is_err());
        assert!(Command::parse(&args(&["frobnicate"])).is_err());
    }
}
