use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::controller::category::{CategoryController, CategoryListView};
use crate::controller::product::{PageEvent, ProductController, ProductListView};
use crate::setup::dependency_injection::DependencyContainer;
use crate::view::form::FormView;
use crate::view::pagination::{PageControl, PaginationView};
use crate::view::table::{RowActionKind, TableRow, TableView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products,
    Categories,
    Next,
    Previous,
    Page(u32),
    Size(u32),
    Add,
    Edit(i64),
    Delete(i64),
    Set { field: String, value: String },
    Image(PathBuf),
    Submit,
    Cancel,
    Help,
    Quit,
}

fn parse_arg<T: FromStr>(token: Option<&str>, usage: &str) -> Result<T, String> {
    token
        .and_then(|t| t.parse::<T>().ok())
        .ok_or_else(|| usage.to_string())
}

pub fn parse(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Err("empty command".to_string());
    };

    let command = match head {
        "products" | "p" => Command::Products,
        "categories" | "c" => Command::Categories,
        "next" => Command::Next,
        "prev" | "previous" => Command::Previous,
        "page" => Command::Page(parse_arg(tokens.next(), "usage: page N")?),
        "size" => Command::Size(parse_arg(tokens.next(), "usage: size N")?),
        "add" => Command::Add,
        "edit" => Command::Edit(parse_arg(tokens.next(), "usage: edit ID")?),
        "delete" | "del" => Command::Delete(parse_arg(tokens.next(), "usage: delete ID")?),
        "set" => {
            let field = tokens
                .next()
                .ok_or_else(|| "usage: set FIELD VALUE".to_string())?
                .to_string();
            let value = tokens.collect::<Vec<_>>().join(" ");
            if value.is_empty() {
                return Err("usage: set FIELD VALUE".to_string());
            }
            Command::Set { field, value }
        }
        "image" => {
            let path = tokens.collect::<Vec<_>>().join(" ");
            if path.is_empty() {
                return Err("usage: image PATH".to_string());
            }
            Command::Image(PathBuf::from(path))
        }
        "submit" | "save" => Command::Submit,
        "cancel" => Command::Cancel,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command: {}", other)),
    };

    Ok(command)
}

fn action_label(kind: RowActionKind) -> &'static str {
    match kind {
        RowActionKind::Edit => "edit",
        RowActionKind::Delete => "delete",
    }
}

pub fn print_table(view: &TableView) {
    let rendered: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| match row {
            TableRow::Data { cells, actions } => {
                let mut line = cells.clone();
                line.push(
                    actions
                        .iter()
                        .map(|a| action_label(a.kind))
                        .collect::<Vec<_>>()
                        .join(" "),
                );
                line
            }
            TableRow::Placeholder(message) => vec![message.clone()],
        })
        .collect();

    let mut widths: Vec<usize> = view.columns.iter().map(|c| c.len()).collect();
    for line in &rendered {
        if line.len() == 1 {
            continue;
        }
        for (i, cell) in line.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header = view
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{:width$}", column, width = widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));

    for line in &rendered {
        if line.len() == 1 {
            println!("{}", line[0]);
        } else {
            let row = line
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join(" | ");
            println!("{}", row);
        }
    }
}

pub fn print_pagination(view: &PaginationView) {
    let parts: Vec<String> = view
        .controls
        .iter()
        .map(|control| match control {
            PageControl::Previous { enabled } => {
                if *enabled {
                    "<prev".to_string()
                } else {
                    "(prev)".to_string()
                }
            }
            PageControl::Page { label, active, .. } => {
                if *active {
                    format!("[{}]", label)
                } else {
                    label.clone()
                }
            }
            PageControl::Next { enabled } => {
                if *enabled {
                    "next>".to_string()
                } else {
                    "(next)".to_string()
                }
            }
        })
        .collect();
    println!("{}", parts.join(" "));
}

pub fn print_form(view: &FormView) {
    println!("-- {} --", view.title);
    for field in &view.fields {
        println!("  {}: {}", field.label, field.value);
    }
    if let Some(preview) = &view.image_preview {
        println!("  Image: {}", preview);
    }
}

fn print_help() {
    println!("commands:");
    println!("  products | categories     switch the active list");
    println!("  next | prev | page N      navigate product pages (as labeled)");
    println!("  size N                    change page size (5, 10 or 20)");
    println!("  add | edit ID | delete ID open a form or remove a record");
    println!("  set FIELD VALUE           fill a form field");
    println!("  image PATH                attach an image file (products)");
    println!("  submit | cancel           close the open form");
    println!("  help | quit");
}

fn print_prompt() {
    use std::io::Write;
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slice {
    Products,
    Categories,
}

pub struct Console {
    products: ProductController,
    categories: CategoryController,
    active: Slice,
}

impl Console {
    pub fn new(container: DependencyContainer) -> Self {
        Self {
            products: container.product_controller,
            categories: container.category_controller,
            active: Slice::Products,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("Catalog admin console. Type 'help' for commands.");
        self.show_products().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        print_prompt();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                print_prompt();
                continue;
            }
            match parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command).await,
                Err(message) => println!("! {}", message),
            }
            print_prompt();
        }

        Ok(())
    }

    fn render_products(view: &ProductListView) {
        print_table(&view.table);
        print_pagination(&view.pagination);
    }

    fn render_categories(view: &CategoryListView) {
        print_table(&view.table);
    }

    async fn show_products(&mut self) {
        match self.products.load().await {
            Ok(view) => Self::render_products(&view),
            Err(e) => println!("! could not load products: {}", e),
        }
    }

    async fn show_categories(&mut self) {
        match self.categories.load().await {
            Ok(view) => Self::render_categories(&view),
            Err(e) => println!("! could not load categories: {}", e),
        }
    }

    async fn dispatch_product_page(&mut self, event: PageEvent) {
        match self.products.dispatch_page(event).await {
            Ok(view) => Self::render_products(&view),
            Err(e) => println!("! could not load products: {}", e),
        }
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::Products => {
                self.active = Slice::Products;
                self.show_products().await;
            }
            Command::Categories => {
                self.active = Slice::Categories;
                self.show_categories().await;
            }
            Command::Next | Command::Previous | Command::Page(_) | Command::Size(_)
                if self.active == Slice::Categories =>
            {
                println!("! pagination applies to the product list");
            }
            Command::Next => self.dispatch_product_page(PageEvent::Next).await,
            Command::Previous => self.dispatch_product_page(PageEvent::Previous).await,
            Command::Page(label) => {
                // Console pages are 1-based, matching the rendered labels.
                self.dispatch_product_page(PageEvent::Select(label.saturating_sub(1)))
                    .await;
            }
            Command::Size(size) => {
                match self.products.change_page_size(size).await {
                    Ok(view) => Self::render_products(&view),
                    Err(e) => println!("! could not load products: {}", e),
                }
            }
            Command::Add => self.open_create().await,
            Command::Edit(id) => self.open_edit(id),
            Command::Delete(id) => self.delete(id).await,
            Command::Set { field, value } => self.set_field(&field, value),
            Command::Image(path) => self.attach_image(path).await,
            Command::Submit => self.submit().await,
            Command::Cancel => {
                match self.active {
                    Slice::Products => self.products.cancel(),
                    Slice::Categories => self.categories.cancel(),
                }
                println!("Form closed.");
            }
            Command::Help => print_help(),
            Command::Quit => {}
        }
    }

    async fn open_create(&mut self) {
        match self.active {
            Slice::Products => {
                match self.products.category_options().await {
                    Ok(options) => {
                        println!("Categories:");
                        for category in &options {
                            println!("  {} - {}", category.id, category.name);
                        }
                    }
                    Err(e) => println!("! could not load categories: {}", e),
                }
                let view = self.products.open_create();
                print_form(&view);
            }
            Slice::Categories => {
                let view = self.categories.open_create();
                print_form(&view);
            }
        }
    }

    fn open_edit(&mut self, id: i64) {
        let view = match self.active {
            Slice::Products => self.products.open_edit(id),
            Slice::Categories => self.categories.open_edit(id),
        };
        match view {
            Some(view) => print_form(&view),
            None => println!("! no record {} in the current list", id),
        }
    }

    async fn delete(&mut self, id: i64) {
        match self.active {
            Slice::Products => match self.products.delete(id).await {
                Ok(view) => Self::render_products(&view),
                Err(e) => println!("! could not delete product: {}", e),
            },
            Slice::Categories => match self.categories.delete(id).await {
                Ok(view) => Self::render_categories(&view),
                Err(e) => println!("! could not delete category: {}", e),
            },
        }
    }

    fn set_field(&mut self, field: &str, value: String) {
        match self.active {
            Slice::Products => {
                let Some(form) = self.products.form_mut() else {
                    println!("! no form is open");
                    return;
                };
                match field {
                    "name" => form.name = value,
                    "price" => match value.parse::<f64>() {
                        Ok(price) => form.price = price,
                        Err(_) => println!("! price must be a number"),
                    },
                    "description" | "desc" => form.description = value,
                    "stock" => match value.parse::<u32>() {
                        Ok(stock) => form.stock = stock,
                        Err(_) => println!("! stock must be a non-negative integer"),
                    },
                    "date" => match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                        Ok(date) => form.ingestion_date = Some(date),
                        Err(_) => println!("! date must be YYYY-MM-DD"),
                    },
                    "category" => match value.parse::<i64>() {
                        Ok(id) => form.category_id = Some(id),
                        Err(_) => println!("! category must be a numeric id"),
                    },
                    other => println!("! unknown field: {}", other),
                }
                if let Some(view) = self.products.form_view() {
                    print_form(&view);
                }
            }
            Slice::Categories => {
                let Some(form) = self.categories.form_mut() else {
                    println!("! no form is open");
                    return;
                };
                match field {
                    "name" => form.name = value,
                    "description" | "desc" => form.description = value,
                    other => println!("! unknown field: {}", other),
                }
                if let Some(view) = self.categories.form_view() {
                    print_form(&view);
                }
            }
        }
    }

    async fn attach_image(&mut self, path: PathBuf) {
        if self.active != Slice::Products {
            println!("! images apply to the product form");
            return;
        }

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                println!("! could not read {}: {}", path.display(), e);
                return;
            }
        };
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        match self.products.form_mut() {
            Some(form) => {
                form.select_image(file_name, bytes);
                if let Some(view) = self.products.form_view() {
                    print_form(&view);
                }
            }
            None => println!("! no form is open"),
        }
    }

    async fn submit(&mut self) {
        match self.active {
            Slice::Products => match self.products.submit().await {
                Ok(view) => {
                    println!("Saved.");
                    Self::render_products(&view);
                }
                Err(e) => println!("! {}", e),
            },
            Slice::Categories => match self.categories.submit().await {
                Ok(view) => {
                    println!("Saved.");
                    Self::render_categories(&view);
                }
                Err(e) => println!("! {}", e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_navigation_commands() {
        assert_eq!(parse("next"), Ok(Command::Next));
        assert_eq!(parse("prev"), Ok(Command::Previous));
        assert_eq!(parse("page 3"), Ok(Command::Page(3)));
        assert_eq!(parse("size 20"), Ok(Command::Size(20)));
    }

    #[test]
    fn should_parse_form_commands() {
        assert_eq!(parse("add"), Ok(Command::Add));
        assert_eq!(parse("edit 42"), Ok(Command::Edit(42)));
        assert_eq!(parse("delete 7"), Ok(Command::Delete(7)));
        assert_eq!(
            parse("set name Cold Brew"),
            Ok(Command::Set {
                field: "name".to_string(),
                value: "Cold Brew".to_string()
            })
        );
        assert_eq!(
            parse("image ./widget.png"),
            Ok(Command::Image(PathBuf::from("./widget.png")))
        );
    }

    #[test]
    fn should_reject_unknown_command() {
        assert!(parse("frobnicate").is_err());
    }

    #[test]
    fn should_reject_set_without_value() {
        assert!(parse("set name").is_err());
    }

    #[test]
    fn should_reject_non_numeric_page() {
        assert!(parse("page three").is_err());
    }
}
