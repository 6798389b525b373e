//! Curated destinations served by `GET /suggested-trips`.

use crate::models::DestinationRecord;

pub static SUGGESTED_TRIPS: [DestinationRecord; 9] = [
    DestinationRecord {
        id: 1,
        destination: "Kyoto, Japan",
        country_code: "JP",
        country_flag: "https://flagcdn.com/w80/jp.png",
        highlights: "Historic temples, beautiful gardens, and traditional tea houses.",
        best_time: "March-May (Spring) or Oct-Nov (Autumn)",
        image_url: "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@35.011636,135.768029,50a,1000d,35y,0h,0t,0r",
    },
    DestinationRecord {
        id: 2,
        destination: "Amalfi Coast, Italy",
        country_code: "IT",
        country_flag: "https://flagcdn.com/w80/it.png",
        highlights: "Stunning coastline, colorful villages, and delicious seafood.",
        best_time: "April-June (Spring)",
        image_url: "https://images.unsplash.com/photo-1533929736458-ca588d08c8be?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@40.633333,14.602778,50a,1000d,35y,0h,0t,0r",
    },
    DestinationRecord {
        id: 3,
        destination: "Mumbai, India",
        country_code: "IN",
        country_flag: "https://flagcdn.com/w80/in.png",
        highlights: "Gateway of India, Marine Drive, and vibrant street food.",
        best_time: "October-March (Winter)",
        image_url: "https://images.unsplash.com/photo-1570168007204-dfb528c6958f?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@18.922064,72.834646,10a,1000d,35y,0h,0t,0r",
    },
    DestinationRecord {
        id: 4,
        destination: "Cape Town, South Africa",
        country_code: "ZA",
        country_flag: "https://flagcdn.com/w80/za.png",
        highlights: "Table Mountain, stunning beaches, and diverse wildlife.",
        best_time: "November-March (Summer)",
        image_url: "https://images.unsplash.com/photo-1580060839134-75a5edca2e99?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@-33.924869,18.424055,10a,1000d,35y,0h,0t,0r",
    },
    DestinationRecord {
        id: 5,
        destination: "Patagonia, Argentina",
        country_code: "AR",
        country_flag: "https://flagcdn.com/w80/ar.png",
        highlights: "Glaciers, mountains, and pristine wilderness.",
        best_time: "December-February (Summer)",
        image_url: "https://images.unsplash.com/photo-1531804055935-76f44d7c3621?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@-50.337975,-72.264724,50a,1000d,35y,0h,0t,0r",
    },
    DestinationRecord {
        id: 6,
        destination: "Santorini, Greece",
        country_code: "GR",
        country_flag: "https://flagcdn.com/w80/gr.png",
        highlights: "White-washed buildings, blue domes, and stunning sunsets.",
        best_time: "April-June or September-October",
        image_url: "https://images.unsplash.com/photo-1613395877344-13d4a8e0d49e?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@36.393156,25.461509,50a,1000d,35y,0h,0t,0r",
    },
    DestinationRecord {
        id: 7,
        destination: "Banff, Canada",
        country_code: "CA",
        country_flag: "https://flagcdn.com/w80/ca.png",
        highlights: "Turquoise lakes, Rocky Mountains, and abundant wildlife.",
        best_time: "June-September (Summer)",
        image_url: "https://images.unsplash.com/photo-1503614472-8c93d56e92ce?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@51.178363,-115.570769,1400a,1000d,35y,0h,0t,0r",
    },
    DestinationRecord {
        id: 8,
        destination: "Sydney, Australia",
        country_code: "AU",
        country_flag: "https://flagcdn.com/w80/au.png",
        highlights: "Opera House, Harbour Bridge, and beautiful beaches.",
        best_time: "September-November or March-May",
        image_url: "https://images.unsplash.com/photo-1506973035872-a4ec16b8e8d9?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@-33.865143,151.209900,10a,1000d,35y,0h,0t,0r",
    },
    DestinationRecord {
        id: 9,
        destination: "Reykjavik, Iceland",
        country_code: "IS",
        country_flag: "https://flagcdn.com/w80/is.png",
        highlights: "Northern lights, geothermal pools, and dramatic landscapes.",
        best_time: "June-August (Summer) or September-March (Northern Lights)",
        image_url: "https://images.unsplash.com/photo-1504893524553-b855bce32c67?w=800&q=80",
        google_earth_url: "https://earth.google.com/web/@64.146582,-21.942636,10a,1000d,35y,0h,0t,0r",
    },
];

pub fn suggested_trips() -> &'static [DestinationRecord] {
    &SUGGESTED_TRIPS
}
