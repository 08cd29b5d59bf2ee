// LLM prompt constants for match scoring.

/// System preamble for scoring — pins the answer inside `\matchScore{}`
/// tags so the response can be parsed with a strict pattern.
pub const SCORING_SYSTEM: &str = r#"You are an expert hiring manager with 30+ years of experience in technical recruitment.
Analyze the candidate's qualifications against the job requirements with the precision of a professional recruiter.

Evaluate the match on a continuous scale from 0.00 to 1.00 where:
- Higher scores indicate better matches
- Consider all aspects including skills, experience level, industry background
- Be precise in your evaluation, using the full range between 0 and 1

IMPORTANT: Place your final score within \matchScore{} tags
Example: \matchScore{0.75}"#;

/// Scoring prompt body. Replace: {experience_level}, {skills},
/// {industries}, {job_titles}, {job_title}, {company}, {description}.
pub const SCORING_PROMPT_TEMPLATE: &str = r#"Compare this candidate's qualifications to the job requirements and provide your expert assessment score:

CANDIDATE QUALIFICATIONS:
- Experience Level: {experience_level}
- Technical Skills: {skills}
- Industry Background: {industries}
- Target Position Type: {job_titles}

JOB REQUIREMENTS:
- Position: {job_title}
- Company: {company}
- Required Qualifications: {description}

Evaluate the match and respond with only a number between 0.00 and 1.00.
"#;
