//! The canned posts offered by the interactive prompt.

use std::io::{BufRead, Write};

use techblog_core::{add_post, Connection, NewPost, Section};

use crate::{write_recent, Result};

/// What the interactive prompt can do.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scenario {
    /// Add the Python and GitHub Actions tutorials, then list 10 posts.
    SamplePosts,
    /// Add the "Quick Test Post".
    QuickPost,
    /// Add the basic sample post, then list 5 posts.
    Basic,
}

impl Scenario {
    /// Any answer other than `1` or `2` runs the basic example.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Scenario::SamplePosts,
            "2" => Scenario::QuickPost,
            _ => Scenario::Basic,
        }
    }
}

const MENU: &str = "
Choose an option:
1. Add sample posts (Python + Automation)
2. Add a quick test post
3. Just run the basic example

Enter choice (1-3): ";

/// Print the menu to `out` and read one answer from `input`.
pub fn prompt(input: &mut impl BufRead, out: &mut impl Write) -> Result<Scenario> {
    writeln!(out, "TechBlog Post Creator")?;
    writeln!(out, "{}", "=".repeat(50))?;
    write!(out, "{MENU}")?;
    out.flush()?;
    let mut choice = String::new();
    input.read_line(&mut choice)?;
    Ok(Scenario::from_choice(&choice))
}

/// Run `scenario` against `conn`, attributing new posts to `author`.
pub fn run_scenario(
    conn: &mut Connection,
    scenario: Scenario,
    author: &str,
    out: &mut impl Write,
) -> Result<()> {
    match scenario {
        Scenario::SamplePosts => {
            writeln!(out, "Adding Python tutorial...")?;
            add_post(conn, &python_tutorial(author))?;
            writeln!(out, "\nAdding automation tutorial...")?;
            add_post(conn, &automation_tutorial(author))?;
            writeln!(out, "\n{}", "=".repeat(60))?;
            write_recent(&*conn, 10, out)
        }
        Scenario::QuickPost => {
            let id = add_post(conn, &quick_post(author))?;
            writeln!(out, "Added post {id}")?;
            Ok(())
        }
        Scenario::Basic => {
            add_post(conn, &sample_post(author))?;
            write_recent(&*conn, 5, out)
        }
    }
}

/// "Mastering Python List Comprehensions", a featured tutorial.
pub fn python_tutorial(author: &str) -> NewPost {
    NewPost::new(
        "Mastering Python List Comprehensions",
        "Learn how to write clean, efficient Python code using list comprehensions with practical examples and best practices.",
        "Programming",
        author,
    )
    .with_sections(vec![
        Section::heading(2, "Introduction to List Comprehensions"),
        Section::text("List comprehensions are a powerful feature in Python that allow you to create lists in a concise and readable way."),
        Section::SectionEnd,
        Section::heading(2, "Basic Syntax"),
        Section::text("The basic syntax of a list comprehension is:"),
        Section::code(
            "python",
            r#"# Basic list comprehension
numbers = [1, 2, 3, 4, 5]
squared = [x**2 for x in numbers]
print(squared)  # Output: [1, 4, 9, 16, 25]

# With condition
even_squares = [x**2 for x in numbers if x % 2 == 0]
print(even_squares)  # Output: [4, 16]"#,
        ),
        Section::SectionEnd,
        Section::heading(2, "Advanced Examples"),
        Section::text("Here are some more complex examples:"),
        Section::code(
            "python",
            r#"# Nested list comprehension
matrix = [[1, 2, 3], [4, 5, 6], [7, 8, 9]]
flattened = [num for row in matrix for num in row]
print(flattened)  # Output: [1, 2, 3, 4, 5, 6, 7, 8, 9]

# Dictionary comprehension
words = ['python', 'java', 'javascript']
word_lengths = {word: len(word) for word in words}
print(word_lengths)  # Output: {'python': 6, 'java': 4, 'javascript': 10}"#,
        ),
        Section::SectionEnd,
        Section::heading(2, "Best Practices"),
        Section::list([
            "Keep list comprehensions simple and readable",
            "Use regular loops for complex logic",
            "Consider generator expressions for large datasets",
            "Use meaningful variable names even in comprehensions",
        ]),
        Section::faq(
            "When should I use list comprehensions?",
            "Use list comprehensions when you need to transform or filter data in a simple, readable way. They are more Pythonic than traditional for loops for simple transformations.",
        ),
        Section::SectionEnd,
    ])
    .with_topics(["Python", "Tutorial", "Best Practices"])
    .with_featured(true)
    .with_featured_image("/static/images/posts/python-list-comprehensions.png")
    .with_read_time(8)
}

/// "GitHub Actions CI/CD Pipeline Setup", highlighted as YAML.
pub fn automation_tutorial(author: &str) -> NewPost {
    NewPost::new(
        "GitHub Actions CI/CD Pipeline Setup",
        "Step-by-step guide to setting up automated testing and deployment using GitHub Actions for your projects.",
        "Automation",
        author,
    )
    .with_sections(vec![
        Section::heading(2, "Setting Up CI/CD with GitHub Actions"),
        Section::text("GitHub Actions provides a powerful platform for automating your development workflow. This guide will show you how to set up a basic CI/CD pipeline."),
        Section::SectionEnd,
        Section::heading(2, "Basic Workflow Configuration"),
        Section::text("Create a .github/workflows/ci.yml file in your repository:"),
        Section::code(
            "yaml",
            r#"name: CI/CD Pipeline

on:
  push:
    branches: [ main, develop ]
  pull_request:
    branches: [ main ]

jobs:
  test:
    runs-on: ubuntu-latest

    steps:
    - uses: actions/checkout@v3

    - name: Set up Python
      uses: actions/setup-python@v3
      with:
        python-version: '3.9'

    - name: Install dependencies
      run: |
        python -m pip install --upgrade pip
        pip install -r requirements.txt

    - name: Run tests
      run: |
        python -m pytest tests/"#,
        ),
        Section::SectionEnd,
        Section::heading(2, "Adding Deployment Stage"),
        Section::code(
            "yaml",
            r#"  deploy:
    needs: test
    runs-on: ubuntu-latest
    if: github.ref == 'refs/heads/main'

    steps:
    - uses: actions/checkout@v3

    - name: Deploy to production
      run: |
        echo "Deploying to production server"
        # Add your deployment commands here"#,
        ),
        Section::text("This configuration will run tests on every push and deploy only when pushing to the main branch."),
        Section::SectionEnd,
    ])
    .with_topics(["GitHub Actions", "CI/CD", "DevOps", "Automation"])
    .with_featured_image("/static/images/posts/github-actions.png")
    .with_read_time(12)
    .with_primary_language("yaml")
}

/// A minimal post in "Tech News".
pub fn quick_post(author: &str) -> NewPost {
    NewPost::new(
        "Quick Test Post",
        "A simple test post to verify the database update functionality.",
        "Tech News",
        author,
    )
    .with_sections(vec![
        Section::heading(2, "Quick Post Example"),
        Section::text(
            "This is a quick example of how to add a simple post to your blog database.",
        ),
        Section::code("python", r#"print("Hello from TechBlog!")"#),
        Section::SectionEnd,
    ])
    .with_topics(["Testing", "Database"])
    .with_read_time(2)
}

/// "Sample Blog Post with Consistent Styling", using every kind of section.
pub fn sample_post(author: &str) -> NewPost {
    NewPost::new(
        "Sample Blog Post with Consistent Styling",
        "Learn how to add new posts to the TechBlog database while maintaining consistent CSS styling and HTML structure.",
        "Programming",
        author,
    )
    .with_sections(vec![
        Section::heading(2, "Introduction"),
        Section::text("This is a sample blog post demonstrating how to add content to the TechBlog database with consistent styling."),
        Section::SectionEnd,
        Section::heading(2, "Code Example"),
        Section::text("Here's a simple Python example:"),
        Section::code(
            "python",
            r#"def hello_world():
    print("Hello, TechBlog!")
    return True

# Call the function
result = hello_world()"#,
        ),
        Section::SectionEnd,
        Section::heading(2, "Key Features"),
        Section::list([
            "Automatic CSS styling matching existing posts",
            "Code syntax highlighting with copy buttons",
            "Responsive design for mobile devices",
            "SEO-friendly slug generation",
        ]),
        Section::faq(
            "Why use this approach?",
            "This approach ensures consistency across all blog posts while maintaining the professional styling and functionality of your existing content.",
        ),
        Section::SectionEnd,
    ])
    .with_topics(["Python", "Database", "Web Development"])
    .with_featured_image("/static/images/posts/sample-post.png")
    .with_read_time(7)
}
