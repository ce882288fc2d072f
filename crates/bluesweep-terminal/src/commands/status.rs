//! Dashboard

use anyhow::Result;
use bluesweep_app::screens::{STATS, TEASER};
use bluesweep_app::AppCore;

pub async fn show(app: &mut AppCore) -> Result<()> {
    app.tick().await;

    println!("Data directory: {}", app.config().data_dir.display());
    let Some(user) = app.session() else {
        println!("Not signed in. Run `bluesweep auth sign-in` or `bluesweep auth sign-up`.");
        return Ok(());
    };
    let verified = if user.email_verified {
        "verified"
    } else {
        "unverified"
    };
    println!("{} ({verified})", app.greeting());
    println!();

    for stat in STATS {
        println!("  {:>6}  {}", stat.value, stat.label);
    }
    println!();
    println!("Eco tip: {}", app.home().current_tip());
    println!();
    println!("Upcoming: {}", TEASER.title);
    println!("  {}", TEASER.when);
    println!("  {}", TEASER.location);
    println!();

    let profile = &app.profile().profile;
    println!(
        "Attended {} | Reports {} | Organized {} | Impact {}",
        profile.events_attended,
        profile.waste_reports,
        profile.events_organized,
        profile.impact_label()
    );
    Ok(())
}
