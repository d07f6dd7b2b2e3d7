use indicatif::*;

/// Terminal progress bar counting rendered frames.
pub struct ProgressReporter {
    pb: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total_work: usize, title: &str) -> Self {
        let pb = ProgressBar::new(total_work as u64);
        let template = format!("{{spinner:.bold.green}} {}: ", title)
            + "[{wide_bar:.cyan}] {pos}/{len} ({elapsed_precise}|{eta_precise}) {msg}";
        let style = ProgressStyle::with_template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▇▆▅▄▃▂▁  ");
        pb.set_style(style);
        pb.tick();
        ProgressReporter { pb }
    }

    /// A reporter that draws nothing, for `--quiet` runs.
    pub fn hidden() -> Self {
        ProgressReporter {
            pb: ProgressBar::hidden(),
        }
    }

    pub fn update(&mut self, num: usize) {
        if num != 0 {
            self.pb.inc(num as u64);
        }
    }

    pub fn set_message(&mut self, msg: String) {
        self.pb.set_message(msg);
    }

    pub fn done(&mut self) {
        self.pb.finish();
    }
}
