use console::Style;
use roam_core::cluster::Marker;
use roam_core::geo::listing_route;
use roam_core::services::UiEvent;
use roam_core::viewport::Region;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    cluster: Style,
    leaf: Style,
    warning: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            cluster: Style::new().green().bold(),
            leaf: Style::new().white(),
            warning: Style::new().dim().yellow(),
        }
    }
}

pub fn print_region(region: &Region, pixel_radius: f64) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Region"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Center"),
        s.value
            .apply_to(format!("{:.5}, {:.5}", region.latitude, region.longitude))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Span"),
        s.value.apply_to(format!(
            "{} x {}",
            region.latitude_delta, region.longitude_delta
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Radius"),
        s.value.apply_to(format!("{} px", pixel_radius))
    );
    println!();
}

pub fn print_markers(markers: &[Marker], listings: usize, rejected: usize) {
    let s = Styles::new();

    let clusters = markers.iter().filter(|m| m.is_cluster()).count();
    println!(
        "  {}  {} markers ({} clusters, {} leaves) from {} listings",
        s.title.apply_to("Markers"),
        markers.len(),
        clusters,
        markers.len() - clusters,
        listings
    );
    if rejected > 0 {
        println!(
            "  {}",
            s.warning
                .apply_to(format!("{} listing(s) rejected, run with -v for details", rejected))
        );
    }
    println!();

    for m in markers {
        let c = m.coordinate();
        let style = if m.is_cluster() { &s.cluster } else { &s.leaf };
        println!(
            "    {:<24}{:>12}   {}",
            style.apply_to(m.key()),
            style.apply_to(m.label()),
            s.label
                .apply_to(format!("{:.5}, {:.5}", c.latitude, c.longitude))
        );
    }
    println!();
}

pub fn print_event(event: &UiEvent) {
    let s = Styles::new();
    let line = match event {
        UiEvent::Navigate { id } => format!("navigate      {}", listing_route(id)),
        UiEvent::Pulse { style } => format!("pulse         {:?}", style),
        UiEvent::AnimateTo { region, animation } => format!(
            "animate {:<6}{:.5}, {:.5} span {}",
            animation.to_string(),
            region.latitude,
            region.longitude,
            region.latitude_delta
        ),
        UiEvent::ScrollTo { offset } => format!("scroll-to     {}", offset),
        UiEvent::CategoryChanged { label } => format!("category      {}", label),
    };
    println!("    {} {}", s.label.apply_to("->"), s.value.apply_to(line));
}
