use chrono::{DateTime, Utc};
use git2::Repository;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Number of recent commits listed in `recent_activity`.
const RECENT_ACTIVITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorStats {
    pub name: String,
    pub email: String,
    pub commits: usize,
}

/// Commit history summary for the repository containing the scanned project
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitAnalysis {
    /// Commits walked (capped by the configured limit)
    pub total_commits: usize,
    /// RFC 3339 time of the newest commit
    pub last_commit_date: Option<String>,
    /// Most active authors first
    pub author_stats: Vec<AuthorStats>,
    /// `[YYYY-MM-DD] summary (author)`, newest first
    pub recent_activity: Vec<String>,
}

/// Walks up to `limit` commits back from HEAD.
/// Returns `None` if `project_root` is not inside a git repository or HEAD is unborn.
pub fn analyze_history(project_root: &Path, limit: usize) -> Option<GitAnalysis> {
    let repo = match Repository::discover(project_root) {
        Ok(r) => r,
        Err(e) => {
            debug!("no git repository: {}", e);
            return None;
        }
    };

    let mut revwalk = repo.revwalk().ok()?;
    revwalk.push_head().ok()?;
    revwalk.set_sorting(git2::Sort::TIME).ok();

    let mut authors: HashMap<String, AuthorStats> = HashMap::new();
    let mut recent_activity = Vec::new();
    let mut last_commit_date = None;
    let mut total_commits = 0;

    // Unreadable entries are skipped without using up the limit.
    let commits = revwalk
        .filter_map(Result::ok)
        .filter_map(|oid| repo.find_commit(oid).ok())
        .take(limit);

    for commit in commits {
        let author = commit.author();
        let name = author.name().unwrap_or("Unknown").to_string();
        let email = author.email().unwrap_or("").to_string();
        let time = DateTime::<Utc>::from_timestamp(commit.time().seconds(), 0);

        if last_commit_date.is_none() {
            last_commit_date = time.map(|t| t.to_rfc3339());
        }
        if recent_activity.len() < RECENT_ACTIVITY {
            let day = time
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            recent_activity.push(format!(
                "[{}] {} ({})",
                day,
                commit.summary().unwrap_or(""),
                name
            ));
        }

        authors
            .entry(email.clone())
            .or_insert_with(|| AuthorStats {
                name,
                email,
                commits: 0,
            })
            .commits += 1;
        total_commits += 1;
    }

    let mut author_stats: Vec<AuthorStats> = authors.into_values().collect();
    author_stats.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.name.cmp(&b.name)));

    Some(GitAnalysis {
        total_commits,
        last_commit_date,
        author_stats,
        recent_activity,
    })
}
