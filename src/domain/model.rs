pub const DEFAULT_LANGUAGES: [&str; 14] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C",
    "C#",
    "Go",
    "Shell",
    "Objective-C",
    "Scala",
    "Swift",
    "TypeScript",
];

pub const TABLE_HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

pub fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|lang| lang.to_string()).collect()
}

/// 來源回傳的單一頁面，已正規化成各來源共用的形狀
#[derive(Debug, Clone)]
pub struct VacancyPage<V> {
    /// 來源回報的總筆數，與分頁無關
    pub found: u64,
    pub more: bool,
    pub items: Vec<V>,
}

/// 一個語言抓完所有分頁後的結果
#[derive(Debug, Clone)]
pub struct FetchOutcome<V> {
    pub found: u64,
    pub vacancies: Vec<V>,
}

impl<V> FetchOutcome<V> {
    pub fn empty(found: u64) -> Self {
        Self {
            found,
            vacancies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    pub language: String,
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

impl AggregateRow {
    pub fn to_cells(&self) -> [String; 4] {
        [
            self.language.clone(),
            self.vacancies_found.to_string(),
            self.vacancies_processed.to_string(),
            self.average_salary.to_string(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ResultTable {
    pub title: String,
    pub rows: Vec<AggregateRow>,
}

impl ResultTable {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: AggregateRow) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 標題列 + 每個語言一列
    pub fn to_cells(&self) -> Vec<[String; 4]> {
        let header = TABLE_HEADER.map(|title| title.to_string());
        std::iter::once(header)
            .chain(self.rows.iter().map(AggregateRow::to_cells))
            .collect()
    }

    pub fn render(&self) -> String {
        crate::core::table::render_table(&self.title, &self.to_cells())
    }
}
