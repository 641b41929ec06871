//! Static content for the About page.

use complaint_map_server_models::ApiAboutSection;

/// Returns the About page sections in display order.
#[must_use]
pub fn sections() -> Vec<ApiAboutSection> {
    vec![
        ApiAboutSection {
            title: "Project Overview",
            paragraphs: vec![
                "This platform is a citizen-centric initiative designed for the city of \
                 Hyderabad, India. Our mission is to bridge the gap between residents and \
                 urban management.",
                "The project provides an interactive map where Hyderabadis can share everyday \
                 urban challenges, such as air quality issues, noise pollution, excessive heat, \
                 or unsafe walking and cycling infrastructure.",
                "Our goal is to leverage citizen-powered data to visualize neighborhood-level \
                 experiences and highlight exactly where the city needs attention.",
            ],
            items: Vec::new(),
        },
        ApiAboutSection {
            title: "Purpose",
            paragraphs: vec![
                "Hyderabad is a rapidly growing metropolis. Many localized issues, like \
                 micro-heat islands or specific traffic noise corridors, often go unnoticed \
                 by large-scale sensors.",
                "This tool makes it easy for anyone in Hyderabad to:",
            ],
            items: vec![
                "Report environmental issues directly from their location",
                "Mark the exact spot on the Hyderabad map",
                "View trending issues reported by fellow citizens",
                "Generate automated emails to relevant city authorities",
            ],
        },
        ApiAboutSection {
            title: "Issue Categories",
            paragraphs: vec![
                "Reports are organized to help identify patterns across the GHMC area.",
                "These categories help authorities and urban planners see which areas of \
                 Hyderabad benefit most from greening, noise barriers, or better sanitation.",
            ],
            items: vec![
                "Air Quality",
                "Noise",
                "Heat",
                "Cycling / Walking",
                "Odour",
                "Water",
                "Other",
            ],
        },
        ApiAboutSection {
            title: "Data & Map Details",
            paragraphs: Vec::new(),
            items: vec![
                "Each report is timestamped and geotagged within Hyderabad city limits.",
                "Reports in dense areas like Ameerpet, Hitech City, or Secunderabad are grouped \
                 on the map.",
                "Heatmaps show hotspots of specific complaints.",
                "All data is used to help citizens visualize the health of their local \
                 environment.",
            ],
        },
    ]
}
