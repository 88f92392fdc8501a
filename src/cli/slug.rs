use crate::services::slug::make_slug;

pub fn run(presenter: &str, title: &str) {
    println!("{}", make_slug(presenter, title));
}
