use super::mode_printer::ModePrinter;
use crate::error::HarnessError;

/// Interface for printing the statistic.
/// `make_report` structures the stored statistic data
pub trait StatisticPrinter {
    fn get_printer_mode(&self) -> &ModePrinter;

    fn make_report(&self) -> String;

    fn print_statistic(&self) -> Result<(), HarnessError> {
        let result = self.make_report();
        let printer_mode = self.get_printer_mode();
        printer_mode.print(format!("{result}\n").as_bytes())
    }
}
