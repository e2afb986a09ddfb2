use anyhow::Result;

use folio_core::content::Slice;
use folio_core::AppConfig;

use super::load_content;

pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let content = load_content(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    if !content.meta.meta_title.is_empty() {
        println!("{}\n", content.meta.meta_title);
    }

    println!("Sections:");
    for slice in content.sections() {
        let detail = match slice {
            Slice::Hero(hero) => format!("{} - {}", hero.name, hero.title),
            Slice::AboutMe(about) => format!("{} skills", about.tech_skills.len()),
            Slice::Services(services) => format!("{} services", services.items.len()),
            Slice::Projects(list) | Slice::Experience(list) => format!("{} entries", list.items.len()),
            Slice::Blog(blog) => format!("{} posts", blog.items.len()),
            Slice::Contact(contact) => contact.email.clone(),
            Slice::Navbar(_) => String::new(),
        };
        println!("  {:<12} -> {:<9} {}", slice.slice_type(), slice.nav_target().label(), detail);
    }

    println!("\nNavigation:");
    for item in content.nav_items() {
        match &item.href {
            Some(href) => println!("  {} ({})", item.label, href),
            None => println!("  {} -> {}", item.label, item.target),
        }
    }

    let posts = content.blog_posts();
    if !posts.is_empty() {
        println!("\nPosts ({}):", posts.len());
        for post in posts {
            let date = post.formatted_date().unwrap_or_else(|| "undated".to_string());
            println!("  {} [{}] {}, {}", post.post_title, post.post_category, date, post.reading_time_label());
        }
    }

    Ok(())
}
