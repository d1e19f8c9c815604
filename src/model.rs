// src/model.rs

/// Numeric id of a project row
pub type ProjectId = i64;

/// Numeric id of a refactoring row
pub type RefactoringId = i64;

/// A mined project, looked up once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

/// A recorded refactoring, as mined from one commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refactoring {
    pub id: RefactoringId,
    pub commit_hash: String,
    pub refactoring_type: String,
    pub refactoring_detail: String,
}

/// A file/line span implicated in a refactoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefactoringRegion {
    /// Which side of the change the span belongs to, as stored (e.g. `o`/`n`)
    pub region_type: String,
    pub path: String,
    pub start_line: i64,
    pub length: i64,
}

/// How many rows to draw from a project
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleSize {
    /// A share of the rows, in (0, 1]
    Fraction(f64),
    /// A fixed number of rows, capped at the number available
    Count(usize),
}

impl SampleSize {
    /// Number of rows to draw out of `total`, never more than `total`
    pub fn resolve(&self, total: usize) -> usize {
        match *self {
            SampleSize::Fraction(f) => ((f * total as f64).round() as usize).min(total),
            SampleSize::Count(c) => c.min(total),
        }
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        SampleSize::Fraction(0.1)
    }
}

/// Index-based selection over one project's refactorings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Unique indices in `[0, total)`, in draw order
    pub indices: Vec<usize>,
    pub total: usize,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Map the sampled indices back to the rows they were drawn from.
    ///
    /// `rows` must be the collection the sample was drawn over.
    pub fn resolve<'a, T>(&'a self, rows: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.indices.iter().filter_map(move |&i| rows.get(i))
    }
}
