use crate::data_models::JobPosting;

pub const MOCK_NOTE: &str = "This is a mock version with sample data.";

/// Static postings served by the mock search endpoint.
pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            title: "Data Scientist Senior".to_string(),
            company: "DXC Technology".to_string(),
            location: "Casablanca, Morocco".to_string(),
            published_at: "2025-10-15T10:00:00".to_string(),
            apply_url: "https://www.linkedin.com/jobs/view/123456".to_string(),
            employment_type: "Full-time".to_string(),
            experience_level: "Experienced".to_string(),
            description: "Python, Machine Learning and SQL expert.".to_string(),
        },
        JobPosting {
            title: "PFE Internship DATA / AI / BI".to_string(),
            company: "Deloitte".to_string(),
            location: "Casablanca, Morocco (Hybrid)".to_string(),
            published_at: "2025-10-14T14:30:00".to_string(),
            apply_url: "https://www.linkedin.com/jobs/view/123457".to_string(),
            employment_type: "Internship".to_string(),
            experience_level: "Entry level".to_string(),
            description: "Internship in Data Science, BI and AI.".to_string(),
        },
    ]
}

/// Sample postings whose title or company contains `keywords`, ignoring case.
pub fn search(keywords: &str) -> Vec<JobPosting> {
    let needle = keywords.to_lowercase();
    sample_jobs()
        .into_iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&needle) || job.company.to_lowercase().contains(&needle)
        })
        .collect()
}
