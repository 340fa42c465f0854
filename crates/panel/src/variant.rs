//! The dashboard variant registry.
//!
//! Every dashboard runs the same selection/filter/rank/projection core;
//! a variant is nothing but labels, column choices and dataset URLs.

use areas::GroupField;

/// Static configuration of one dashboard variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardVariant {
    pub slug: &'static str,
    /// Fixed base path the dashboard is mounted at.
    pub base_path: &'static str,
    pub bar_title: &'static str,
    pub map_title: &'static str,
    /// Y-axis label of the bar chart (the entity noun).
    pub area_label: &'static str,
    pub pie_regions_title: &'static str,
    pub pie_areas_title: &'static str,
    pub table_title: &'static str,
    /// Which column the secondary dropdown filters on.
    pub secondary_filter: GroupField,
    /// Secondary category carried by the per-state pie slices.
    pub pie_regions_category: GroupField,
    /// Secondary category carried by the per-area pie slices.
    pub pie_areas_category: GroupField,
    /// Initial value of the modality dropdown, when the control is
    /// single-select; multi-select variants start empty.
    pub default_modality: Option<&'static str>,
    pub csv_filename: &'static str,
    /// Candidate URLs for the boundary resource, tried in order
    /// (CDN mirror first, origin fallback).
    pub boundary_urls: &'static [&'static str],
    /// Candidate URLs for the tabular resource, tried in order.
    pub table_urls: &'static [&'static str],
}

pub const VARIANTS: &[DashboardVariant] = &[
    DashboardVariant {
        slug: "ameaca_terras_indigenas",
        base_path: "/ameaca_terras_indigenas",
        bar_title: "Top 10 Terras Indígenas por Desmatamento",
        map_title: "Mapa de Ameaça de Desmatamento (km²)",
        area_label: "Terras Indígenas",
        pie_regions_title: "Ameaça por Estado/Fase",
        pie_areas_title: "Ameaça por Terra Indígena",
        table_title: "Top 10 Terras Indígenas Mais Afetadas",
        secondary_filter: GroupField::Phase,
        pie_regions_category: GroupField::Phase,
        pie_areas_category: GroupField::Phase,
        default_modality: Some("Terra Indigena"),
        csv_filename: "ameaca_terras_indigenas.csv",
        boundary_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/geojson/AMEACA_GERAL_Terra_indigena.geojson",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/geojson/AMEACA_GERAL_Terra_indigena.geojson",
        ],
        table_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/json/AMEACA_GERAL_Terra_indigena.json",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/json/AMEACA_GERAL_Terra_indigena.json",
        ],
    },
    DashboardVariant {
        slug: "ameaca_ucs",
        base_path: "/ameaca_ucs",
        bar_title: "Top 10 UCs por Desmatamento",
        map_title: "Mapa de Ameaça de Desmatamento (km²)",
        area_label: "Unidades de Conservação",
        pie_regions_title: "Ameaça Desmatamento por Estado de Uso e Categoria",
        pie_areas_title: "Ameaça Desmatamento por Unidade de Conservação",
        table_title: "Top 10 Áreas Protegidas Mais Afetadas",
        secondary_filter: GroupField::Use,
        pie_regions_category: GroupField::Category,
        pie_areas_category: GroupField::Use,
        default_modality: Some("UC Federal"),
        csv_filename: "desmatamento_ucs.csv",
        boundary_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/geojson/AMEACA_GERAL_UCs.geojson",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/geojson/AMEACA_GERAL_UCs.geojson",
        ],
        table_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/json/AMEACA_GERAL_UCs.json",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/json/AMEACA_GERAL_UCs.json",
        ],
    },
    DashboardVariant {
        slug: "ameaca_area_de_protecao",
        base_path: "/area_de_protecao",
        bar_title: "Top 10 Áreas de Proteção Ambiental por Desmatamento",
        map_title: "Mapa de Ameaça de Desmatamento (km²)",
        area_label: "Área de Proteção Ambiental",
        pie_regions_title: "Ameaça Desmatamento por Estado de Uso e Categoria",
        pie_areas_title: "Ameaça Desmatamento por Área de Proteção Ambiental",
        table_title: "Top 10 Áreas Protegidas Mais Afetadas",
        secondary_filter: GroupField::Use,
        pie_regions_category: GroupField::Modality,
        pie_areas_category: GroupField::Uf,
        default_modality: None,
        csv_filename: "ameaca_area_protecao.csv",
        boundary_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/geojson/AMEACA_GERAL_Area_de_Protecao.geojson",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/geojson/AMEACA_GERAL_Area_de_Protecao.geojson",
        ],
        table_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/json/AMEACA_GERAL_Area_de_Protecao.json",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/json/AMEACA_GERAL_Area_de_Protecao.json",
        ],
    },
    DashboardVariant {
        slug: "pressao_terras_indigenas",
        base_path: "/ap/pressao_terras_indigenas",
        bar_title: "Top 10 Terras Indígenas por Desmatamento",
        map_title: "Mapa de Pressão de Desmatamento (km²)",
        area_label: "Terras Indígenas",
        pie_regions_title: "Pressão Desmatamento por Estado de Uso e Categoria",
        pie_areas_title: "Pressão Desmatamento por Terra Indígena",
        table_title: "Top 10 Áreas Protegidas Mais Afetadas",
        secondary_filter: GroupField::Phase,
        pie_regions_category: GroupField::Phase,
        pie_areas_category: GroupField::Phase,
        default_modality: Some("Terra Indigena"),
        csv_filename: "pressao_terras_indigenas.csv",
        boundary_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/geojson/PRESSAO_GERAL_Terra_indigena.geojson",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/geojson/PRESSAO_GERAL_Terra_indigena.geojson",
        ],
        table_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/json/PRESSAO_GERAL_Terra_indigena.json",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/json/PRESSAO_GERAL_Terra_indigena.json",
        ],
    },
    DashboardVariant {
        slug: "pressao_ucs",
        base_path: "/ap/pressao_ucs",
        bar_title: "Top 10 UCs por Desmatamento",
        map_title: "Mapa de Pressão de Desmatamento (km²)",
        area_label: "Unidades de Conservação",
        pie_regions_title: "Pressão Desmatamento por Estado de Uso e Categoria",
        pie_areas_title: "Pressão Desmatamento por Unidade de Conservação",
        table_title: "Top 10 Áreas Protegidas Mais Afetadas",
        secondary_filter: GroupField::Use,
        pie_regions_category: GroupField::Category,
        pie_areas_category: GroupField::Use,
        default_modality: Some("UC Federal"),
        csv_filename: "pressao_ucs.csv",
        boundary_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/geojson/PRESSAO_GERAL_UCs.geojson",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/geojson/PRESSAO_GERAL_UCs.geojson",
        ],
        table_urls: &[
            "https://cdn.jsdelivr.net/gh/imazon-cgi/ap@main/dataset/json/PRESSAO_GERAL_UCs.json",
            "https://raw.githubusercontent.com/imazon-cgi/ap/main/dataset/json/PRESSAO_GERAL_UCs.json",
        ],
    },
];

/// Looks a variant up by slug.
pub fn variant(slug: &str) -> Option<&'static DashboardVariant> {
    VARIANTS.iter().find(|v| v.slug == slug)
}
