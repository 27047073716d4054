use crate::convert::{convert, Style};
use crate::input::Record;
use crate::{BatchResult, RecordOutcome};
use rayon::prelude::*;

pub struct BatchConverter {
    styles: Vec<Style>,
    fail_fast: bool,
}

impl BatchConverter {
    pub fn new(styles: Vec<Style>, fail_fast: bool) -> Self {
        Self { styles, fail_fast }
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Convert every record under every configured style.
    ///
    /// Records are converted in parallel; outcomes come back in input order,
    /// styles in configured order within a record. With `fail_fast` the
    /// outcomes stop at the first failure.
    pub fn run(&self, records: &[Record]) -> BatchResult {
        tracing::debug!(
            records = records.len(),
            styles = self.styles.len(),
            "converting batch"
        );

        let mut outcomes: Vec<RecordOutcome> = records
            .par_iter()
            .flat_map_iter(|record| {
                self.styles.iter().map(move |&style| RecordOutcome {
                    index: record.index,
                    input: record.display_input(),
                    style,
                    output: convert(&record.value, style),
                })
            })
            .collect();

        if self.fail_fast {
            if let Some(pos) = outcomes.iter().position(|o| o.output.is_err()) {
                outcomes.truncate(pos + 1);
            }
        }

        let failed_count = outcomes.iter().filter(|o| o.output.is_err()).count();

        BatchResult {
            converted_count: outcomes.len() - failed_count,
            failed_count,
            records: outcomes,
        }
    }
}
