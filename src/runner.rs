// src/runner.rs
use std::{
    path::{Path, PathBuf}, thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::{ consts::WORKERS, options::{ScheduleKind, VariantConfig} },
    core::html,
    data::ScheduleDay,
    engine,
    file::read_page,
    progress::Progress,
};

/// Outcome for one input page. Errors are flattened to text so a bad file
/// never aborts the batch.
pub type PageOutcome = Result<Vec<ScheduleDay>, String>;

/// Parse every page in `paths` with the configuration for `kind`.
/// Results come back in input order regardless of which worker finished first.
pub fn parse_files(
    paths: &[PathBuf],
    kind: ScheduleKind,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<(PathBuf, PageOutcome)> {
    if paths.is_empty() {
        return Vec::new();
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
        p.log(&format!("Parsing {} {} page(s)…", paths.len(), kind));
    }

    let cfg = VariantConfig::for_kind(kind);
    let paths_arc = Arc::new(paths.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<(usize, PageOutcome)>();

    let workers = WORKERS.min(paths.len()).max(1);

    for _ in 0..workers {
        let paths = Arc::clone(&paths_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= paths.len() {
                    break;
                }
                let _ = tx.send((i, parse_one(&paths[i], &cfg)));
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut slots: Vec<Option<PageOutcome>> = vec![None; paths.len()];
    for _ in 0..paths.len() {
        let Ok((i, outcome)) = res_rx.recv() else { break }; // workers ended early
        let name = paths[i].display().to_string();
        match &outcome {
            Ok(days) => {
                logd!("Runner: {} → {} days", name, days.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, &name);
                }
            }
            Err(msg) => {
                loge!("Runner: {} failed: {}", name, msg);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, &name, msg);
                }
            }
        }
        slots[i] = Some(outcome);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    paths
        .iter()
        .cloned()
        .zip(slots)
        .map(|(path, slot)| (path, slot.unwrap_or_else(|| Err(s!("worker exited before parsing")))))
        .collect()
}

fn parse_one(path: &Path, cfg: &VariantConfig) -> PageOutcome {
    let bytes = read_page(path).map_err(|e| e.to_string())?;
    let doc = html::parse_page_bytes(&bytes).map_err(|e| e.to_string())?;
    engine::extract(&doc, cfg).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Default)]
    struct Recorder {
        total: usize,
        done: Vec<usize>,
        failed: Vec<usize>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = total; }
        fn item_done(&mut self, idx: usize, _name: &str) { self.done.push(idx); }
        fn item_failed(&mut self, idx: usize, _name: &str, _err: &str) { self.failed.push(idx); }
        fn finish(&mut self) { self.finished = true; }
    }

    const PAGE: &str = r#"<div class="view-content"><span class="view-grouping-header">Пн</span>
        <h3>1</h3><div class="stud_schedule"><div id="group_full"><div class="group_content">Math<br>Smith, 101, Lecture</div></div></div>
        </div>"#;

    #[test]
    fn keeps_input_order_and_reports_failures() {
        let dir = std::env::temp_dir().join(join!("rozklad_runner_", &std::process::id().to_string()));
        fs::create_dir_all(&dir).unwrap();

        let mut paths = Vec::new();
        for i in 0..6 {
            let p = dir.join(format!("page{i}.html"));
            if i == 3 {
                fs::write(&p, "<p>nothing</p>").unwrap();
            } else {
                fs::write(&p, PAGE).unwrap();
            }
            paths.push(p);
        }
        paths.push(dir.join("missing.html"));

        let mut rec = Recorder::default();
        let out = parse_files(&paths, ScheduleKind::Student, Some(&mut rec));

        assert_eq!(out.len(), 7);
        for (i, (p, _)) in out.iter().enumerate() {
            assert_eq!(p, &paths[i]);
        }
        assert!(out[3].1.as_ref().unwrap_err().contains("container"));
        assert!(out[6].1.is_err());
        assert_eq!(out[0].1.as_ref().unwrap()[0].lessons[0].subject, "Math");

        assert_eq!(rec.total, 7);
        assert_eq!(rec.done.len(), 5);
        let mut failed = rec.failed.clone();
        failed.sort_unstable();
        assert_eq!(failed, vec![3, 6]);
        assert!(rec.finished);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(parse_files(&[], ScheduleKind::Teacher, None).is_empty());
    }
}
