/*
Copyright 2022 Volker Schwaberow <volker@schwaberow.de>
Permission is hereby granted, free of charge, to any person obtaining a
copy of this software and associated documentation files (the
"Software"), to deal in the Software without restriction, including without
limitation the rights to use, copy, modify, merge, publish, distribute,
sublicense, and/or sell copies of the Software, and to permit persons to whom the
Software is furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be
included in all copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS
OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR
OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE,
ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
DEALINGS IN THE SOFTWARE.
Author(s): Volker Schwaberow
*/

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy)]
pub struct ScanState {
    total_targets: usize,
    reflected: usize,
    clean: usize,
    failed: usize,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
}

impl ScanState {
    pub fn new() -> ScanState {
        ScanState {
            total_targets: 0,
            reflected: 0,
            clean: 0,
            failed: 0,
            start_time: Utc::now(),
            end_time: None,
        }
    }

    pub fn add_reflected(&mut self) {
        self.reflected += 1;
    }

    pub fn add_clean(&mut self) {
        self.clean += 1;
    }

    pub fn add_failure(&mut self) {
        self.failed += 1;
    }

    pub fn set_total_targets(&mut self, total_targets: usize) {
        self.total_targets = total_targets;
    }

    pub fn total_targets(&self) -> usize {
        self.total_targets
    }

    pub fn reflected(&self) -> usize {
        self.reflected
    }

    pub fn clean(&self) -> usize {
        self.clean
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Utc::now());
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn elapsed_ms(&self) -> i64 {
        let end = self.end_time.unwrap_or_else(Utc::now);
        (end - self.start_time).num_milliseconds()
    }

    pub fn summary(&self) -> String {
        let end = self.end_time.unwrap_or_else(Utc::now);
        format!(
            "{} targets. Started at {} / Ended at {}. {} ms. Reflected: {}. Clean: {}. Failed: {}.",
            self.total_targets,
            self.start_time.format("%Y-%m-%d %H:%M:%S"),
            end.format("%Y-%m-%d %H:%M:%S"),
            self.elapsed_ms(),
            self.reflected,
            self.clean,
            self.failed
        )
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
