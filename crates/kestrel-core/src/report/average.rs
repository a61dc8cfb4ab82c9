use super::{Report, ReportRow};
use crate::log::{DateFilter, LogRecord, ParsedLine, parse_line};
use std::collections::HashMap;

/// Request count and average response time per handler
pub struct AverageReport;

/// Running totals for one handler; exists only after the first record
#[derive(Debug)]
struct HandlerAccumulator {
    total_requests: u64,
    total_response_time: f64,
    /// Insertion index, the tie-break key when request counts are equal
    first_seen: usize,
}

impl Report for AverageReport {
    fn rows(&self, lines: &[String], filter: Option<&DateFilter>) -> Vec<ReportRow> {
        let mut handlers: HashMap<String, HandlerAccumulator> = HashMap::new();

        for line in lines {
            let record = match parse_line(line) {
                ParsedLine::Record(record) => record,
                ParsedLine::Unusable(_) => continue,
            };

            if let Some(filter) = filter
                && !filter.matches(&record)
            {
                continue;
            }

            let LogRecord {
                handler,
                response_time,
                ..
            } = record;

            let next_index = handlers.len();
            handlers
                .entry(handler)
                .and_modify(|acc| {
                    acc.total_requests += 1;
                    acc.total_response_time += response_time;
                })
                .or_insert(HandlerAccumulator {
                    total_requests: 1,
                    total_response_time: response_time,
                    first_seen: next_index,
                });
        }

        tracing::debug!(
            "Aggregated {} handler(s) from {} line(s)",
            handlers.len(),
            lines.len()
        );

        let mut rows: Vec<(usize, ReportRow)> = handlers
            .into_iter()
            .map(|(handler, acc)| {
                (
                    acc.first_seen,
                    ReportRow {
                        handler,
                        total_requests: acc.total_requests,
                        avg_response_time: acc.total_response_time / acc.total_requests as f64,
                    },
                )
            })
            .collect();

        rows.sort_by(|(first_a, a), (first_b, b)| {
            b.total_requests
                .cmp(&a.total_requests)
                .then(first_a.cmp(first_b))
        });

        rows.into_iter().map(|(_, row)| row).collect()
    }
}
