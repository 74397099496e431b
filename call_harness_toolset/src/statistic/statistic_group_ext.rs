use super::statistic_consumer::{Statistic, StatisticConsumer};
use crate::tx_result::TxResult;

pub trait StatisticGroupExt {
    /// Feeds every consumer and concatenates their reports
    fn process_statistic<const N: usize>(
        &self,
        consumers: [Box<dyn StatisticConsumer>; N],
    ) -> String;

    fn populate_statistic<const N: usize>(
        &self,
        consumers: [Box<dyn StatisticConsumer>; N],
    ) -> [Box<dyn StatisticConsumer>; N];
}

impl StatisticGroupExt for [Statistic] {
    fn process_statistic<const N: usize>(
        &self,
        consumers: [Box<dyn StatisticConsumer>; N],
    ) -> String {
        self.populate_statistic(consumers)
            .iter()
            .map(|consumer| consumer.make_report())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn populate_statistic<const N: usize>(
        &self,
        consumers: [Box<dyn StatisticConsumer>; N],
    ) -> [Box<dyn StatisticConsumer>; N] {
        consumers.map(|mut consumer| {
            self.iter()
                .for_each(|stat| consumer.consume_statistic(stat));
            consumer
        })
    }
}

impl StatisticGroupExt for [TxResult] {
    fn process_statistic<const N: usize>(
        &self,
        consumers: [Box<dyn StatisticConsumer>; N],
    ) -> String {
        self.iter()
            .map(Statistic::from)
            .collect::<Vec<_>>()
            .process_statistic(consumers)
    }

    fn populate_statistic<const N: usize>(
        &self,
        consumers: [Box<dyn StatisticConsumer>; N],
    ) -> [Box<dyn StatisticConsumer>; N] {
        self.iter()
            .map(Statistic::from)
            .collect::<Vec<_>>()
            .populate_statistic(consumers)
    }
}
