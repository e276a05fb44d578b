use crate::domain::model::{AggregateRow, FetchOutcome};
use crate::domain::ports::SalaryBounds;

/// 依上下限估算單筆職缺薪資，整數截斷
///
/// 只有上限時取 80%，只有下限時取 120%，兩者都有時取平均。
/// 用整數運算避免浮點誤差把截斷結果推到下一個整數。
pub fn predict_salary(salary_from: Option<u64>, salary_to: Option<u64>) -> Option<u64> {
    match (salary_from, salary_to) {
        (None, None) => None,
        (None, Some(to)) => Some(scale(to, 4, 5)),
        (Some(from), None) => Some(scale(from, 6, 5)),
        (Some(from), Some(to)) => Some(((u128::from(from) + u128::from(to)) / 2) as u64),
    }
}

fn scale(value: u64, numerator: u128, denominator: u128) -> u64 {
    let scaled = u128::from(value) * numerator / denominator;
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

pub fn estimate<V: SalaryBounds>(vacancy: &V) -> Option<u64> {
    predict_salary(vacancy.salary_from(), vacancy.salary_to())
}

/// 空清單沒有平均值
pub fn average_salary(estimates: &[u64]) -> Option<u64> {
    if estimates.is_empty() {
        return None;
    }
    let total: u128 = estimates.iter().map(|&value| u128::from(value)).sum();
    Some((total / estimates.len() as u128) as u64)
}

/// 把一個語言的抓取結果彙整成一列；沒有可估算的職缺時不產生列
pub fn summarize<V: SalaryBounds>(language: &str, outcome: &FetchOutcome<V>) -> Option<AggregateRow> {
    let estimates: Vec<u64> = outcome.vacancies.iter().filter_map(estimate).collect();
    let average = average_salary(&estimates)?;
    let processed = estimates.len() as u64;

    Some(AggregateRow {
        language: language.to_string(),
        vacancies_found: outcome.found.max(outcome.vacancies.len() as u64),
        vacancies_processed: processed,
        average_salary: average,
    })
}
