//! Page templates for the web UI.
//!
//! Every page is a flat, self-contained minijinja template embedded as a
//! constant and compiled once into an [`Environment`] at startup. Template
//! names end in `.html` so minijinja applies HTML auto-escaping.

use minijinja::value::Value;
use minijinja::{Environment, context};

use crate::domain::{Note, User};
use crate::web::html::markdown_to_html;

// ===========================================
// Templates
// ===========================================

pub const HOME_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>jot</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    {% if username %}
    <a href="/notes">My notes</a>
    <a href="/notes/add">Add note</a>
    <a href="/auth/logout">Log out</a>
    {% else %}
    <a href="/auth/login">Log in</a>
    <a href="/auth/signup">Sign up</a>
    {% endif %}
</nav>
<main>
    <h1>jot</h1>
    <p>A small place for your notes.</p>
    {% if username %}
    <p>Signed in as {{ username }}. <a href="/notes">Go to your notes</a>.</p>
    {% else %}
    <p><a href="/auth/login">Log in</a> or <a href="/auth/signup">sign up</a> to start writing.</p>
    {% endif %}
</main>
</body>
</html>"##;

pub const LOGIN_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Log in</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    <a href="/auth/signup">Sign up</a>
</nav>
<main>
    <h1>Log in</h1>
    {% if error %}
    <p class="error">{{ error }}</p>
    {% endif %}
    <form method="post" action="/auth/login">
        <input type="hidden" name="next" value="{{ next }}">
        <label>Username
            <input type="text" name="username" value="{{ username }}">
        </label>
        <label>Password
            <input type="password" name="password">
        </label>
        <button type="submit">Log in</button>
    </form>
</main>
</body>
</html>"##;

pub const LOGOUT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Logged out</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    <a href="/auth/login">Log in</a>
</nav>
<main>
    <h1>Logged out</h1>
    <p>You have been signed out. <a href="/auth/login">Log in again</a>.</p>
</main>
</body>
</html>"##;

pub const SIGNUP_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Sign up</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    <a href="/auth/login">Log in</a>
</nav>
<main>
    <h1>Sign up</h1>
    {% if errors %}
    <ul class="errors">
        {% for error in errors %}
        <li>{{ error }}</li>
        {% endfor %}
    </ul>
    {% endif %}
    <form method="post" action="/auth/signup">
        <label>Username
            <input type="text" name="username" value="{{ username }}">
        </label>
        <label>Password
            <input type="password" name="password">
        </label>
        <button type="submit">Sign up</button>
    </form>
</main>
</body>
</html>"##;

pub const LIST_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>My notes</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    <a href="/notes">My notes</a>
    <a href="/notes/add">Add note</a>
    <a href="/auth/logout">Log out ({{ username }})</a>
</nav>
<main>
    <h1>My notes</h1>
    {% if notes %}
    <ul class="notes">
        {% for note in notes %}
        <li>
            <a href="/notes/{{ note.slug }}">{{ note.title }}</a>
            <a href="/notes/{{ note.slug }}/edit">edit</a>
            <a href="/notes/{{ note.slug }}/delete">delete</a>
        </li>
        {% endfor %}
    </ul>
    {% else %}
    <p>No notes yet. <a href="/notes/add">Add one</a>.</p>
    {% endif %}
</main>
</body>
</html>"##;

pub const DETAIL_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{{ title }}</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    <a href="/notes">My notes</a>
    <a href="/notes/add">Add note</a>
    <a href="/auth/logout">Log out ({{ username }})</a>
</nav>
<main>
    <article>
        <header>
            <h1>{{ title }}</h1>
            <div class="metadata">
                <time datetime="{{ created_iso }}">{{ created }}</time>
                {% if modified != created %}
                (updated <time datetime="{{ modified_iso }}">{{ modified }}</time>)
                {% endif %}
            </div>
        </header>
        <div class="note-body">{{ body|safe }}</div>
        <footer>
            <a href="/notes/{{ slug }}/edit">Edit</a>
            <a href="/notes/{{ slug }}/delete">Delete</a>
        </footer>
    </article>
</main>
</body>
</html>"##;

pub const NOTE_FORM_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{{ heading }}</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    <a href="/notes">My notes</a>
    <a href="/auth/logout">Log out ({{ username }})</a>
</nav>
<main>
    <h1>{{ heading }}</h1>
    {% if errors %}
    <ul class="errors">
        {% for error in errors %}
        <li>{{ error }}</li>
        {% endfor %}
    </ul>
    {% endif %}
    <form method="post" action="{{ action }}">
        <label>Title
            <input type="text" name="title" value="{{ title }}">
        </label>
        <label>Text
            <textarea name="text">{{ text }}</textarea>
        </label>
        <label>Slug
            <input type="text" name="slug" value="{{ slug }}">
        </label>
        <p class="hint">Leave the slug empty to derive one from the title.</p>
        <button type="submit">Save</button>
    </form>
</main>
</body>
</html>"##;

pub const DELETE_CONFIRM_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Delete note</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    <a href="/notes">My notes</a>
    <a href="/auth/logout">Log out ({{ username }})</a>
</nav>
<main>
    <h1>Delete note</h1>
    <p>Delete "{{ title }}"? This cannot be undone.</p>
    <form method="post" action="/notes/{{ slug }}/delete">
        <button type="submit">Delete</button>
        <a href="/notes/{{ slug }}">Cancel</a>
    </form>
</main>
</body>
</html>"##;

pub const SUCCESS_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Done</title>
</head>
<body>
<nav>
    <a href="/">Home</a>
    <a href="/notes">My notes</a>
    <a href="/notes/add">Add note</a>
    <a href="/auth/logout">Log out ({{ username }})</a>
</nav>
<main>
    <h1>Done</h1>
    <p>Your change has been saved.</p>
    <p><a href="/notes">Back to your notes</a></p>
</main>
</body>
</html>"##;

/// Static page for missing or non-owned resources. Carries no dynamic
/// data so it can be served without the template environment.
pub const NOT_FOUND_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Not found</title>
</head>
<body>
<main>
    <h1>Not found</h1>
    <p>There is no such page. <a href="/notes">Back to your notes</a>.</p>
</main>
</body>
</html>"##;

// ===========================================
// Rendering
// ===========================================

/// Values for the shared note form page, used by both add and edit.
pub struct NoteFormPage<'a> {
    pub heading: &'a str,
    pub action: &'a str,
    pub title: &'a str,
    pub text: &'a str,
    pub slug: &'a str,
    pub errors: &'a [String],
}

/// All page templates, compiled once at startup.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compiles every page template into a fresh environment.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("home.html", HOME_TEMPLATE)?;
        env.add_template("login.html", LOGIN_TEMPLATE)?;
        env.add_template("logout.html", LOGOUT_TEMPLATE)?;
        env.add_template("signup.html", SIGNUP_TEMPLATE)?;
        env.add_template("list.html", LIST_TEMPLATE)?;
        env.add_template("detail.html", DETAIL_TEMPLATE)?;
        env.add_template("note_form.html", NOTE_FORM_TEMPLATE)?;
        env.add_template("delete_confirm.html", DELETE_CONFIRM_TEMPLATE)?;
        env.add_template("success.html", SUCCESS_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render_home(&self, username: Option<&str>) -> Result<String, minijinja::Error> {
        self.env
            .get_template("home.html")?
            .render(context! { username => username })
    }

    pub fn render_login(
        &self,
        next: &str,
        error: Option<&str>,
        username: &str,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("login.html")?.render(context! {
            next => next,
            error => error,
            username => username,
        })
    }

    pub fn render_logout(&self) -> Result<String, minijinja::Error> {
        self.env.get_template("logout.html")?.render(context! {})
    }

    pub fn render_signup(
        &self,
        errors: &[String],
        username: &str,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("signup.html")?.render(context! {
            errors => errors,
            username => username,
        })
    }

    pub fn render_list(&self, user: &User, notes: &[Note]) -> Result<String, minijinja::Error> {
        let items: Vec<Value> = notes
            .iter()
            .map(|note| {
                context! {
                    title => note.title(),
                    slug => note.slug(),
                }
            })
            .collect();

        self.env.get_template("list.html")?.render(context! {
            username => user.username(),
            notes => items,
        })
    }

    pub fn render_detail(&self, user: &User, note: &Note) -> Result<String, minijinja::Error> {
        let body = markdown_to_html(note.text());
        let created = note.created().format("%Y-%m-%d %H:%M").to_string();
        let modified = note.modified().format("%Y-%m-%d %H:%M").to_string();

        self.env.get_template("detail.html")?.render(context! {
            username => user.username(),
            title => note.title(),
            slug => note.slug(),
            body => body,
            created => created,
            created_iso => note.created().to_rfc3339(),
            modified => modified,
            modified_iso => note.modified().to_rfc3339(),
        })
    }

    pub fn render_note_form(
        &self,
        user: &User,
        page: &NoteFormPage,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("note_form.html")?.render(context! {
            username => user.username(),
            heading => page.heading,
            action => page.action,
            title => page.title,
            text => page.text,
            slug => page.slug,
            errors => page.errors,
        })
    }

    pub fn render_delete_confirm(
        &self,
        user: &User,
        note: &Note,
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template("delete_confirm.html")?
            .render(context! {
                username => user.username(),
                title => note.title(),
                slug => note.slug(),
            })
    }

    pub fn render_success(&self, user: &User) -> Result<String, minijinja::Error> {
        self.env
            .get_template("success.html")?
            .render(context! { username => user.username() })
    }
}
