use super::statistic_consumer::StatisticConsumer;
use crate::error::HarnessError;

/// Prints aggregated statistic of multiple consumers stored in some group
pub trait StatisticGroupPrinter {
    fn print_statistic(&self) -> Result<(), HarnessError>;
}

impl<const N: usize> StatisticGroupPrinter for [Box<dyn StatisticConsumer>; N] {
    fn print_statistic(&self) -> Result<(), HarnessError> {
        self.iter()
            .try_for_each(|consumer| consumer.print_statistic())
    }
}

impl StatisticGroupPrinter for Vec<Box<dyn StatisticConsumer>> {
    fn print_statistic(&self) -> Result<(), HarnessError> {
        self.iter()
            .try_for_each(|consumer| consumer.print_statistic())
    }
}
