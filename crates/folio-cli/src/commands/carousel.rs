use anyhow::Result;
use serde::Serialize;

use folio_core::carousel::{CardPose, CardRole, CarouselController};

#[derive(Serialize)]
struct CardReport {
    index: usize,
    role: CardRole,
    pose: CardPose,
}

pub fn run(items: usize, active: i64, compact: bool, json: bool) -> Result<()> {
    let mut carousel = CarouselController::new(items);
    carousel.jump_to(active)?;

    let cards: Vec<CardReport> = carousel
        .roles()
        .into_iter()
        .enumerate()
        .map(|(index, role)| CardReport {
            index,
            role,
            pose: role.pose(compact),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!("Active: {} of {}\n", carousel.active_index(), items);
    println!("  {:>5}  {:<10} {:>8} {:>7} {:>5} {:>6} {:>3}", "card", "role", "x", "opacity", "scale", "rotate", "z");
    for card in &cards {
        println!(
            "  {:>5}  {:<10} {:>8.0} {:>7.1} {:>5.2} {:>6.0} {:>3}",
            card.index,
            card.role.as_str(),
            card.pose.x_offset,
            card.pose.opacity,
            card.pose.scale,
            card.pose.rotate_y,
            card.pose.z_index
        );
    }
    Ok(())
}
