// LLM prompt constants for resume analysis.

/// Resume analysis prompt. Replace `{positions}` and `{resume_text}`
/// before sending. The exact-count demand is repeated because smaller
/// models drift on list lengths; the validation gate in the analyzer is
/// what actually enforces it.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this resume and provide job position recommendations.
Consider the candidate's experience, skills, and career progression.

IMPORTANT: You must return EXACTLY {positions} job positions, no more, no less.
Failure to provide exactly {positions} positions will invalidate the response.

Resume text:
{resume_text}

Provide the output in this exact JSON format:
{
    "jobTitles": [Array of EXACTLY {positions} job titles],
    "skills": [key technical and soft skills],
    "experienceLevel": "entry/mid/senior",
    "industries": [relevant industries],
    "searchKeywords": [important terms for job search]
}

Rules:
1. The jobTitles array MUST contain exactly {positions} items
2. Each job title should be unique
3. Titles should be ordered from most to least relevant
4. If not enough direct matches, suggest related roles that fit the candidate's skills
"#;
