use crate::domain::model::{FetchOutcome, VacancyPage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 任何帶有薪資上下限的職缺紀錄
pub trait SalaryBounds {
    fn salary_from(&self) -> Option<u64>;
    fn salary_to(&self) -> Option<u64>;
}

/// 分頁的職缺搜尋來源
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Vacancy: SalaryBounds + Send + Sync;

    /// 日誌與錯誤訊息中使用的來源名稱
    fn name(&self) -> &str;

    /// 輸出表格的標題
    fn title(&self) -> &str;

    /// 總筆數低於此值的語言直接略過
    fn min_found(&self) -> u64;

    /// 最多請求幾頁，即使來源回報還有更多
    fn max_pages(&self) -> u32;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage<Self::Vacancy>>;

    async fn fetch_all(&self, language: &str) -> Result<FetchOutcome<Self::Vacancy>> {
        let mut vacancies = Vec::new();
        let mut found = 0;

        for page in 0..self.max_pages() {
            let batch = self.fetch_page(language, page).await?;
            found = batch.found;

            if page == 0 && found < self.min_found() {
                tracing::debug!(
                    "{}: only {} vacancies for {}, below the minimum of {}",
                    self.name(),
                    found,
                    language,
                    self.min_found()
                );
                return Ok(FetchOutcome::empty(found));
            }

            let has_next = batch.more && !batch.items.is_empty();
            tracing::debug!(
                "{}: page {} of {} returned {} vacancies",
                self.name(),
                page,
                language,
                batch.items.len()
            );
            vacancies.extend(batch.items);

            if !has_next {
                break;
            }
            if page + 1 == self.max_pages() {
                tracing::debug!(
                    "{}: page cap of {} reached for {}",
                    self.name(),
                    self.max_pages(),
                    language
                );
            }
        }

        Ok(FetchOutcome { found, vacancies })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Bound(Option<u64>, Option<u64>);

    impl SalaryBounds for Bound {
        fn salary_from(&self) -> Option<u64> {
            self.0
        }

        fn salary_to(&self) -> Option<u64> {
            self.1
        }
    }

    /// 假來源：每頁一筆，永遠回報還有下一頁
    struct EndlessSource {
        found: u64,
        requests: AtomicU32,
    }

    #[async_trait]
    impl VacancySource for EndlessSource {
        type Vacancy = Bound;

        fn name(&self) -> &str {
            "endless"
        }

        fn title(&self) -> &str {
            "Endless"
        }

        fn min_found(&self) -> u64 {
            10
        }

        fn max_pages(&self) -> u32 {
            4
        }

        async fn fetch_page(&self, _language: &str, _page: u32) -> Result<VacancyPage<Bound>> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(VacancyPage {
                found: self.found,
                more: true,
                items: vec![Bound(Some(100), None)],
            })
        }
    }

    #[tokio::test]
    async fn test_fetch_all_stops_at_page_cap() {
        let source = EndlessSource {
            found: u64::MAX,
            requests: AtomicU32::new(0),
        };

        let outcome = source.fetch_all("Rust").await.unwrap();

        assert_eq!(source.requests.load(Ordering::SeqCst), 4);
        assert_eq!(outcome.vacancies.len(), 4);
        assert_eq!(outcome.found, u64::MAX);
    }

    #[tokio::test]
    async fn test_fetch_all_below_minimum_returns_nothing() {
        let source = EndlessSource {
            found: 9,
            requests: AtomicU32::new(0),
        };

        let outcome = source.fetch_all("COBOL").await.unwrap();

        assert_eq!(source.requests.load(Ordering::SeqCst), 1);
        assert!(outcome.vacancies.is_empty());
        assert_eq!(outcome.found, 9);
    }
}
