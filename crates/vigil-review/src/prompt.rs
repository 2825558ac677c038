use vigil_core::SupportedLanguage;

/// Build the review prompt sent to the text-generation endpoint.
///
/// The wording is a contract with the model: the focus phrase appears
/// twice, the code is embedded unmodified inside a fence tagged with the
/// lowercased language name, and the five review dimensions and five
/// feedback fields are fixed.
///
/// # Examples
///
/// ```
/// use vigil_core::SupportedLanguage;
/// use vigil_review::prompt::create_analysis_prompt;
///
/// let prompt = create_analysis_prompt(
///     "let x = 1;",
///     "src/a.ts",
///     "bugs and obvious issues",
///     SupportedLanguage::TypeScript,
/// );
/// assert!(prompt.contains("with emphasis on: bugs and obvious issues"));
/// assert!(prompt.contains("Code to review (src/a.ts):"));
/// assert!(prompt.contains("let x = 1;"));
/// ```
pub fn create_analysis_prompt(
    code: &str,
    filename: &str,
    focus: &str,
    language: SupportedLanguage,
) -> String {
    let fence_tag = language.to_string().to_lowercase();
    format!(
        "You are an expert code reviewer focusing on issues related to {focus}.\n\
         Analyze this {language} code with emphasis on: {focus}\n\
         \n\
         1. **Bugs and Logic Issues** - Potential runtime errors, edge cases, off-by-one errors\n\
         2. **Performance Concerns** - Inefficient algorithms, memory leaks, unnecessary operations\n\
         3. **Security Issues** - Input validation, SQL injection, XSS vulnerabilities\n\
         4. **Code Quality** - Readability, maintainability, adherence to best practices\n\
         5. **Testing Gaps** - Missing test cases, untestable code patterns\n\
         \n\
         Code to review ({filename}):\n\
         ```{fence_tag}\n\
         {code}\n\
         ```\n\
         \n\
         Provide specific, actionable feedback in this format:\n\
         - **Issue Type:** Brief description\n\
         - **Location:** Line number or function name\n\
         - **Problem:** What's wrong\n\
         - **Fix:** Specific recommendation\n\
         - **Priority:** High/Medium/Low\n"
    )
}
