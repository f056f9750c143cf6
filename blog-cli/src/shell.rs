use std::fmt::Display;
use std::io::Write;

use blog_core::{BlogApp, BlogForm, BlogId, Credentials, DomainError, PostForm, PostId};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct BlogFields {
    #[clap(long)]
    name: String,
    #[clap(long)]
    slug: String,
    #[clap(long)]
    description: String,
    #[clap(long, default_value = "")]
    logo_url: String,
    #[clap(long, default_value = "")]
    category: String,
    #[clap(long, default_value = "")]
    theme: String,
}

impl From<BlogFields> for BlogForm {
    fn from(fields: BlogFields) -> Self {
        BlogForm {
            name: fields.name,
            slug: fields.slug,
            description: fields.description,
            logo_url: fields.logo_url,
            category: fields.category,
            theme: fields.theme,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in to continue to your blogs
    Login {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
        #[clap(long)]
        remember_me: bool,
    },
    Logout,
    /// List all blogs
    Blogs,
    CreateBlog {
        #[clap(flatten)]
        fields: BlogFields,
    },
    EditBlog {
        id: BlogId,
        #[clap(flatten)]
        fields: BlogFields,
    },
    DeleteBlog {
        id: BlogId,
    },
    /// List the posts of a blog
    Posts {
        blog_id: BlogId,
    },
    /// Create a "New Blog N" placeholder blog
    NewBlog,
    /// Create a post; without --title and --content a "New Post N" draft is created
    NewPost {
        blog_id: BlogId,
        #[clap(long, requires = "content")]
        title: Option<String>,
        #[clap(long, requires = "title")]
        content: Option<String>,
    },
    EditPost {
        blog_id: BlogId,
        post_id: PostId,
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
    },
    DeletePost {
        post_id: PostId,
    },
    #[clap(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
enum ShellError {
    Domain(DomainError),
    Io(anyhow::Error),
}

impl From<DomainError> for ShellError {
    fn from(err: DomainError) -> Self {
        ShellError::Domain(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err.into())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Io(err.into())
    }
}

pub struct Shell<W: Write> {
    app: BlogApp,
    out: W,
    json: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(app: BlogApp, out: W, json: bool) -> Self {
        Self { app, out, json }
    }

    /// Runs one input line. Usage and domain errors are printed; only
    /// output failures are returned.
    pub fn run_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        let words = match split_words(line) {
            Ok(words) if words.is_empty() => return Ok(Flow::Continue),
            Ok(words) => words,
            Err(message) => {
                self.report_error(&message)?;
                return Ok(Flow::Continue);
            }
        };

        let command = match Line::try_parse_from(words) {
            Ok(line) => line.command,
            Err(err) if !err.use_stderr() || !self.json => {
                write!(self.out, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                let rendered = err.render().to_string();
                let message = rendered.trim().trim_start_matches("error: ");
                self.report_error(message)?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(ShellError::Domain(err)) => {
                self.report_error(&err.to_string())?;
                Ok(Flow::Continue)
            }
            Err(ShellError::Io(err)) => Err(err),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        match command {
            Command::Login {
                email,
                password,
                remember_me,
            } => {
                self.app.sign_in(Credentials {
                    email,
                    password,
                    remember_me,
                });
                self.notice("Welcome back!")?;
            }
            Command::Logout => {
                self.app.sign_out();
                self.notice("Signed out.")?;
            }
            Command::Blogs => {
                let blogs = self.app.dashboard()?.to_vec();
                self.print_all(&blogs)?;
            }
            Command::CreateBlog { fields } => {
                let blog = self.app.create_blog(fields.into())?;
                self.print(&blog)?;
            }
            Command::NewBlog => {
                let blog = self.app.new_blog_draft()?;
                self.print(&blog)?;
            }
            Command::EditBlog { id, fields } => {
                let blog = self.app.edit_blog(id, fields.into())?;
                self.print(&blog)?;
            }
            Command::DeleteBlog { id } => {
                if self.app.delete_blog(id)? {
                    self.notice("Blog deleted successfully")?;
                } else {
                    self.notice(&format!("No blog with id {}", id))?;
                }
            }
            Command::Posts { blog_id } => {
                let listing = self.app.blog_posts(blog_id)?;
                if !self.json {
                    writeln!(self.out, "{}", listing.blog.name)?;
                }
                if listing.posts.is_empty() && !self.json {
                    writeln!(self.out, "No posts yet")?;
                } else {
                    self.print_all(&listing.posts)?;
                }
            }
            Command::NewPost {
                blog_id,
                title,
                content,
            } => {
                let post = match title {
                    Some(title) => self.app.create_post(
                        blog_id,
                        PostForm {
                            title,
                            content: content.unwrap_or_default(),
                        },
                    )?,
                    None => self.app.new_draft(blog_id)?,
                };
                self.print(&post)?;
            }
            Command::EditPost {
                blog_id,
                post_id,
                title,
                content,
            } => {
                let post = self
                    .app
                    .edit_post(blog_id, post_id, PostForm { title, content })?;
                self.print(&post)?;
            }
            Command::DeletePost { post_id } => {
                if self.app.delete_post(post_id)? {
                    self.notice("Post deleted successfully")?;
                } else {
                    self.notice(&format!("No post with id {}", post_id))?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn notice(&mut self, message: &str) -> std::io::Result<()> {
        if self.json {
            writeln!(self.out, "{}", json!({ "message": message }))
        } else {
            writeln!(self.out, "{}", message)
        }
    }

    fn report_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.json {
            writeln!(self.out, "{}", json!({ "error": message }))
        } else {
            writeln!(self.out, "error: {}", message)
        }
    }

    fn print<T: Serialize + Display>(&mut self, item: &T) -> Result<(), ShellError> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(item)?)?;
        } else {
            writeln!(self.out, "{}", item)?;
        }
        Ok(())
    }

    fn print_all<T: Serialize + Display>(&mut self, items: &[T]) -> Result<(), ShellError> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(items)?)?;
        } else {
            for item in items {
                writeln!(self.out, "- {}", item)?;
            }
        }
        Ok(())
    }
}

/// Splits a line on whitespace; single or double quotes group words.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
