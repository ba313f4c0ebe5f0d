// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use rozklad_scrape::{ScheduleKind, csv, day_layouts, parse_page};

const DAYS: [&str; 6] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб"];
const IDS: [&str; 5] = ["group_full", "group_chys", "group_znam", "sub_1_chys", "sub_2_znam"];

/// A week of nested day groupings, five pairs a day, mixed row markers.
fn synthetic_week() -> String {
    let mut body = String::new();
    for (d, day) in DAYS.iter().enumerate() {
        body.push_str(&format!(
            r#"<div class="view-grouping"><span class="view-grouping-header">{day}</span><div class="view-grouping-content">"#
        ));
        for pair in 1..=5 {
            body.push_str(&format!("<h3>{pair}</h3><div class=\"stud_schedule\">"));
            for (r, id) in IDS.iter().enumerate().take(1 + (d + pair) % IDS.len()) {
                let class = if r % 2 == 0 { "week_color" } else { "" };
                body.push_str(&format!(
                    r#"<div class="views-row"><div id="{id}" class="{class}"><div class="group_content">Дисципліна {d}.{pair}.{r}<br>Викладач {r}, {pair}0{d}, Лекція<br><a href="https://example.org/{d}/{pair}">link</a></div></div></div>"#
                ));
            }
            body.push_str("</div>");
        }
        body.push_str("</div></div>");
    }
    format!(r#"<html><body><div class="view-content">{body}</div></body></html>"#)
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = synthetic_week();

    c.bench_function("parse_student_week", |b| {
        b.iter(|| {
            let days = parse_page(black_box(&doc), ScheduleKind::Student).unwrap_or_default();
            black_box(days.len())
        })
    });

    c.bench_function("parse_teacher_week", |b| {
        b.iter(|| {
            let days = parse_page(black_box(&doc), ScheduleKind::Teacher).unwrap_or_default();
            black_box(days.len())
        })
    });

    let days = parse_page(&doc, ScheduleKind::Student).unwrap_or_default();

    c.bench_function("layouts_week", |b| {
        b.iter(|| {
            let n: usize = black_box(&days).iter().map(|d| day_layouts(d).len()).sum();
            black_box(n)
        })
    });

    c.bench_function("export_csv_week", |b| {
        b.iter(|| black_box(csv::to_export_string(black_box(&days), true, ',')).len())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
