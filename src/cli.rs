// src/cli.rs
use std::{error::Error, path::PathBuf};

use crate::config::consts::{LOG_FILE, STORE_DIR};
use crate::config::options::ExportOptions;
use crate::data::{ScheduleDay, SubgroupTag};
use crate::file::{render, write_export};
use crate::params::Params;
use crate::progress::Progress;
use crate::runner::parse_files;

pub const HELP: &str = "\
Usage: rozklad [options] FILE...

Reads saved timetable pages and prints or exports the lessons.

Options:
  --kind K            student | student-exam | teacher | teacher-exam | remote
                      (default: student)
  --format F          csv | tsv | text (default: csv)
  --include-headers   write a header row (csv/tsv)
  --subgroup N        keep only subgroup N (1 or 2) plus whole-group lessons
  --active-only       keep only lessons that take place this week
  -o, --out PATH      write to PATH instead of stdout
  --log [PATH.log]    write a debug log (default: .store/debug.log)
  -h, --help          show this help
";

pub enum Action {
    Run(Params),
    Help,
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Action, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new();
    let mut args = args.into_iter().peekable();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--kind" => {
                let v = args.next().ok_or("Missing value for --kind")?;
                params.kind = v.parse()?;}
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = v.parse()?;}
            "--include-headers" => params.include_headers = true,
            "--subgroup" => {
                let v: u8 = args.next().ok_or("Missing value for --subgroup")?.parse()?;
                params.subgroup = SubgroupTag::from_number(v)
                    .ok_or_else(|| format!("Subgroup must be 1 or 2, got {}", v))?;}
            "--active-only" => params.active_only = true,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--log" => {
                // optional value: only taken when it names a .log file
                let path = match args.next_if(|next| next.ends_with(".log")) {
                    Some(p) => PathBuf::from(p),
                    None => PathBuf::from(STORE_DIR).join(LOG_FILE),
                };
                params.log = Some(path);}
            "-h" | "--help" => return Ok(Action::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown arg: {}", a).into());
            }
            _ => params.files.push(PathBuf::from(&a)),
        }
    }

    if params.files.is_empty() {
        return Err("No input files (see --help)".into());
    }
    Ok(Action::Run(params))
}

/// Prints one line per page to stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn item_failed(&mut self, _idx: usize, name: &str, err: &str) {
        eprintln!("{}: {}", name, err);
    }
}

/// Apply the subgroup / this-week filters; days left empty are dropped.
pub fn apply_filters(days: Vec<ScheduleDay>, params: &Params) -> Vec<ScheduleDay> {
    days.into_iter()
        .map(|d| if params.subgroup.is_some() { d.for_subgroup(params.subgroup) } else { d })
        .map(|d| if params.active_only { d.active_only() } else { d })
        .filter(|d| !d.is_empty())
        .collect()
}

pub fn run(params: Params) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &params.log {
        let used = crate::log::init(path);
        logf!("CLI: logging to {}", used.display());
    }

    let outcomes = parse_files(&params.files, params.kind, Some(&mut StderrProgress));
    let total = outcomes.len();

    let mut days = Vec::new();
    let mut failed = 0usize;
    for (_, outcome) in outcomes {
        match outcome {
            Ok(d) => days.extend(d),
            Err(_) => failed += 1,
        }
    }
    if failed == total {
        return Err(format!("No page could be parsed ({} failed)", failed).into());
    }

    let days = apply_filters(days, &params);
    logf!("CLI: {} pages ok, {} failed, {} days after filters", total - failed, failed, days.len());

    let mut export = ExportOptions::default();
    export.format = params.format;
    export.include_headers = params.include_headers;

    match &params.out {
        Some(out) => {
            export.set_path(&out.to_string_lossy());
            let path = write_export(&export, &days)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", render(&export, &days)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{ExportFormat, ScheduleKind};
    use crate::data::fixtures::lesson;
    use crate::data::WeekType;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| s!(*a)).collect()
    }

    fn params(list: &[&str]) -> Params {
        match parse_args(args(list)).unwrap() {
            Action::Run(p) => p,
            Action::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn parses_full_flag_set() {
        let p = params(&[
            "--kind", "teacher-exam", "--format", "tsv", "--include-headers",
            "--subgroup", "2", "--active-only", "-o", "out/x.tsv", "a.html", "b.html",
        ]);
        assert_eq!(p.kind, ScheduleKind::TeacherExam);
        assert_eq!(p.format, ExportFormat::Tsv);
        assert!(p.include_headers && p.active_only);
        assert_eq!(p.subgroup, SubgroupTag::Subgroup2);
        assert_eq!(p.out, Some(PathBuf::from("out/x.tsv")));
        assert_eq!(p.files.len(), 2);
        assert!(p.log.is_none());
    }

    #[test]
    fn log_value_is_optional() {
        let p = params(&["--log", "page.html"]);
        assert_eq!(p.log, Some(PathBuf::from(STORE_DIR).join(LOG_FILE)));
        assert_eq!(p.files, vec![PathBuf::from("page.html")]);

        let p = params(&["--log", "run.log", "page.html"]);
        assert_eq!(p.log, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(args(&["--subgroup", "3", "a.html"])).is_err());
        assert!(parse_args(args(&["--kind", "dean", "a.html"])).is_err());
        assert!(parse_args(args(&["--bogus", "a.html"])).is_err());
        assert!(parse_args(args(&[])).is_err());
        assert!(matches!(parse_args(args(&["-h"])), Ok(Action::Help)));
    }

    #[test]
    fn filters_drop_emptied_days() {
        let mut mon = ScheduleDay::new("Пн");
        mon.lessons = vec![lesson("1", WeekType::Full, SubgroupTag::Subgroup1)];
        let mut tue = ScheduleDay::new("Вт");
        tue.lessons = vec![
            lesson("1", WeekType::Full, SubgroupTag::None),
            lesson("2", WeekType::Odd, SubgroupTag::None),
        ];

        let mut p = Params::new();
        p.subgroup = SubgroupTag::Subgroup2;
        p.active_only = true;
        let out = apply_filters(vec![mon, tue], &p);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Вт");
        assert_eq!(out[0].lessons.len(), 1);
    }
}
