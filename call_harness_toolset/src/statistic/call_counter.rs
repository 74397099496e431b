use super::{
    mode_printer::ModePrinter,
    statistic_consumer::{Statistic, StatisticConsumer},
    statistic_printer::StatisticPrinter,
};
use owo_colors::OwoColorize;
use prettytable::{row, Table};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodCalls {
    pub calls: u64,
    /// Calls that reached the network, rejected arguments and unknown methods excluded
    pub dispatched: u64,
    pub failures: u64,
}

/// Counts invocations, dispatched calls and failures per method
#[derive(Debug, Default)]
pub struct CallCounter {
    pub func_count: HashMap<String, MethodCalls>,
    mode_printer: ModePrinter,
}

impl CallCounter {
    pub fn new(mode_printer: ModePrinter) -> Self {
        Self {
            func_count: HashMap::new(),
            mode_printer,
        }
    }

    pub fn get(&self, method_name: &str) -> MethodCalls {
        self.func_count
            .get(method_name)
            .copied()
            .unwrap_or_default()
    }
}

impl StatisticPrinter for CallCounter {
    fn get_printer_mode(&self) -> &ModePrinter {
        &self.mode_printer
    }

    fn make_report(&self) -> String {
        let mut count_stat_vec: Vec<_> = self.func_count.iter().collect();
        count_stat_vec.sort_by(|a, b| b.1.calls.cmp(&a.1.calls).then_with(|| a.0.cmp(b.0)));

        let mut table = Table::new();
        table.add_row(row!["Method", "Calls", "Dispatched", "Failures"]);
        for (method_name, count) in count_stat_vec {
            table.add_row(row![
                method_name.green().bold(),
                count.calls.blue(),
                count.dispatched.cyan(),
                count.failures.red()
            ]);
        }
        format!("{}\n{}", "Number of calls".bright_yellow().bold(), table)
    }
}

impl StatisticConsumer for CallCounter {
    fn consume_statistic(&mut self, stat: &Statistic) {
        let count = self.func_count.entry(stat.method_name.clone()).or_default();
        count.calls += 1;
        if stat.dispatched {
            count.dispatched += 1;
        }
        if stat.failed {
            count.failures += 1;
        }
    }

    fn clean_statistic(&mut self) {
        self.func_count.clear();
    }
}
