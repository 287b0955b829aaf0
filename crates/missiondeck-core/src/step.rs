use crate::extract;
use crate::grammar;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One numbered instruction inside a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: u32,
    pub title: String,
    pub description: String,
    pub commands: Vec<String>,
    pub checklist: Vec<String>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse the steps of a mission body. A mission without an instructions
/// section has no steps; that is valid, not an error.
pub fn parse_steps(body: &str) -> Vec<Step> {
    let section = extract::between(body, grammar::STEPS_HEADING, grammar::CRITERIA_HEADING);
    if section.is_empty() {
        return Vec::new();
    }
    grammar::numbered_sections(grammar::step_header_re(), section)
        .into_iter()
        .map(|sec| Step {
            number: sec.number,
            title: sec.title.to_string(),
            description: first_plain_line(sec.body),
            commands: fenced_commands(sec.body),
            checklist: checklist_items(sec.body),
        })
        .collect()
}

/// First line that is not blank, a fence, a heading, or bold metadata.
/// When the step has no prose at all this lands on a command line inside
/// the fence; callers live with that.
fn first_plain_line(step_body: &str) -> String {
    step_body
        .lines()
        .map(str::trim)
        .find(|l| {
            !l.is_empty() && !l.starts_with("```") && !l.starts_with('#') && !l.starts_with("**")
        })
        .unwrap_or("")
        .to_string()
}

/// Interior lines of the first fenced block only. Later fences in the same
/// step are ignored. Lines keep their indentation; blank lines are dropped.
fn fenced_commands(step_body: &str) -> Vec<String> {
    grammar::code_fence_re()
        .captures(step_body)
        .map(|caps| {
            caps[1]
                .split('\n')
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn checklist_items(step_body: &str) -> Vec<String> {
    step_body
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("- ["))
        .map(|l| {
            grammar::checkbox_prefix_re()
                .replace(l, "")
                .trim()
                .to_string()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\n\
### 🚀 Step-by-Step Instructions\n\
**Work through each step in order:**\n\
\n\
#### Step 1: Scaffold the project\n\
Create the project directory and install dependencies.\n\
```bash\n\
mkdir kv-store && cd kv-store\n\
npm init -y\n\
```\n\
**Success Checklist:**\n\
- [ ] Directory exists\n\
- [x] Dependencies installed\n\
\n\
#### Step 2: Write the server\n\
Implement the TCP listener.\n\
```bash\n\
touch server.js\n\
```\n\
**Success Checklist:**\n\
- [ ] Server starts\n\
\n\
### 🎯 Success Criteria\n\
- [ ] All green\n";

    #[test]
    fn parses_numbered_steps() {
        let steps = parse_steps(BODY);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].number, 1);
        assert_eq!(steps[0].title, "Scaffold the project");
        assert_eq!(
            steps[0].description,
            "Create the project directory and install dependencies."
        );
        assert_eq!(
            steps[0].commands,
            vec!["mkdir kv-store && cd kv-store", "npm init -y"]
        );
        assert_eq!(
            steps[0].checklist,
            vec!["Directory exists", "Dependencies installed"]
        );
        assert_eq!(steps[1].number, 2);
        assert_eq!(steps[1].checklist, vec!["Server starts"]);
    }

    #[test]
    fn steps_stop_at_success_criteria() {
        let steps = parse_steps(BODY);
        assert!(!steps[1].checklist.contains(&"All green".to_string()));
    }

    #[test]
    fn missing_section_yields_no_steps() {
        assert!(parse_steps("### 💡 What You're Building\nstuff").is_empty());
    }

    #[test]
    fn only_first_fence_is_commands() {
        let body = "\n\
### 🚀 Step-by-Step Instructions\n\
#### Step 1: Two fences\n\
Run the first block.\n\
```bash\n\
echo first\n\
```\n\
Some more prose.\n\
```\n\
echo second\n\
```\n\
### 🎯 Success Criteria\n\
- [ ] done\n";
        let steps = parse_steps(body);
        assert_eq!(steps[0].commands, vec!["echo first"]);
    }

    #[test]
    fn blank_description_falls_to_command_line() {
        let body = "\n\
### 🚀 Step-by-Step Instructions\n\
#### Step 1: No prose\n\
```bash\n\
echo only-commands\n\
```\n\
### 🎯 Success Criteria\n\
- [ ] done\n";
        let steps = parse_steps(body);
        assert_eq!(steps[0].description, "echo only-commands");
    }

    #[test]
    fn fence_lines_keep_indentation() {
        let body = "\n\
### 🚀 Step-by-Step Instructions\n\
#### Step 1: Indented\n\
Write the loop.\n\
```bash\n\
for f in *.md; do\n\
\x20\x20echo \"$f\"\n\
done\n\
```\n\
### 🎯 Success Criteria\n\
- [ ] done\n";
        let steps = parse_steps(body);
        assert_eq!(steps[0].commands[1], "  echo \"$f\"");
    }
}
