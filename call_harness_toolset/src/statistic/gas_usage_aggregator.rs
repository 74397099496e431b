use super::{
    mode_printer::ModePrinter,
    statistic_consumer::{Statistic, StatisticConsumer},
    statistic_printer::StatisticPrinter,
};
use ethers::types::U256;
use owo_colors::OwoColorize;
use prettytable::{row, Table};
use std::collections::{BinaryHeap, HashMap};

#[derive(Debug, Default)]
pub struct OperationGasUsage {
    pub heap: BinaryHeap<U256>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationGasStatistic {
    pub min: U256,
    pub max: U256,
    pub median: U256,
}

impl From<&OperationGasUsage> for OperationGasStatistic {
    fn from(op_gas: &OperationGasUsage) -> Self {
        let gas_vec = op_gas.heap.clone().into_sorted_vec();
        let (Some(min), Some(max)) = (gas_vec.first(), gas_vec.last()) else {
            return Self::default();
        };
        let mid = gas_vec.len() / 2;
        let median = if gas_vec.len() % 2 == 0 {
            (gas_vec[mid] + gas_vec[mid - 1]) / 2
        } else {
            gas_vec[mid]
        };

        Self {
            min: *min,
            max: *max,
            median,
        }
    }
}

/// Min / median / max gas used per method, only confirmed transactions are counted
#[derive(Debug, Default)]
pub struct GasUsage {
    pub func_gas: HashMap<String, OperationGasUsage>,
    mode_printer: ModePrinter,
}

impl GasUsage {
    pub fn new(mode_printer: ModePrinter) -> Self {
        Self {
            func_gas: HashMap::new(),
            mode_printer,
        }
    }

    pub fn get(&self, method_name: &str) -> Option<OperationGasStatistic> {
        self.func_gas.get(method_name).map(OperationGasStatistic::from)
    }
}

impl StatisticPrinter for GasUsage {
    fn get_printer_mode(&self) -> &ModePrinter {
        &self.mode_printer
    }

    fn make_report(&self) -> String {
        let mut methods: Vec<_> = self.func_gas.iter().collect();
        methods.sort_by(|a, b| a.0.cmp(b.0));

        let mut table = Table::new();
        table.add_row(row!["Method", "Min", "Median", "Max"]);
        for (method_name, gas) in methods {
            let gas_stat = OperationGasStatistic::from(gas);
            table.add_row(row![
                method_name.green().bold(),
                gas_stat.min.bright_magenta(),
                gas_stat.median.bright_magenta().bold(),
                gas_stat.max.bright_magenta()
            ]);
        }
        format!("{}\n{}", "Gas usage".bright_yellow().bold(), table)
    }
}

impl StatisticConsumer for GasUsage {
    fn consume_statistic(&mut self, stat: &Statistic) {
        if let Some(gas_used) = stat.gas_used {
            self.func_gas
                .entry(stat.method_name.clone())
                .or_default()
                .heap
                .push(gas_used);
        }
    }

    fn clean_statistic(&mut self) {
        self.func_gas.clear();
    }
}
