use fincard_core::pipeline::{run_asset, ScrapedAssets};
use fincard_core::sites;
use fincard_core::Value;

// The builtin StatusInvest REIT configuration over a scraped page.

fn scraped() -> ScrapedAssets {
    serde_json::from_value(serde_json::json!({
        "assets": [{
            "ticker": "WXYZ11",
            "views": {
                "info": [[
                    { "label": "TICKET", "value": "WXYZ11" },
                    { "label": "NOME PREGÃO", "value": "Fii Exemplo" },
                    { "label": "ÍNICIO DO FUNDO", "value": "05/01/2010" },
                    { "label": "TIPO DA GESTÃO", "value": "Ativa" },
                    { "label": "SEGMENTO ANBIMA", "value": "Títulos e Val. Mob." }
                ]],
                "price": [
                    [
                        { "label": "TICKET", "value": "WXYZ11" },
                        { "label": "MOEDA", "value": "BRL" },
                        { "label": "VALOR ATUAL", "value": "R$ 98,76" },
                        { "label": "MIN. 52 SEMANAS", "value": "R$ 90,00" },
                        { "label": "MÁX. 52 SEMANAS", "value": "R$ 105,10" },
                        { "label": "VALORIZAÇÃO (12M)", "value": "4,2 ARROW_UPWARD%" }
                    ],
                    [
                        { "label": "MÊS ATUAL", "value": "-0,8%" },
                        { "label": "ÚLTIMOS 12 MESES", "value": "R$ 12,40" }
                    ]
                ],
                "kpi": [[
                    { "label": "TICKET", "value": "WXYZ11" },
                    { "label": "DIVIDEND YIELD", "value": "12,56" },
                    { "label": "TOTAL", "value": "R$ 25.300.000,00" },
                    { "label": "VALOR EM CAIXA", "value": "3,75" },
                    { "label": "DY CAGR(3 ANOS) 2021-2024", "value": "4,2" },
                    { "label": "Nº DE COTISTAS", "value": "125.430" },
                    { "label": "TAXAS ADMINISTRAÇÃO", "value": "1,00 %" }
                ]]
            }
        }]
    }))
    .unwrap()
}

#[test]
fn reit_page() {
    let time = std::time::Instant::now();
    let site = sites::builtin("statusinvest-reits").unwrap();
    let assets = scraped();
    let rows = run_asset(&site, &assets.assets[0]).unwrap();
    println!("RUN ASSET: {:?}s", time.elapsed().as_secs_f64());

    let table = &rows.table;
    assert_eq!(table.len(), site.table.len());

    // -- INFO --
    assert_eq!(table.get("NOME").and_then(Value::as_text), Some("FII EXEMPLO"));
    assert_eq!(
        table.get("DATA DE CRIAÇÃO").and_then(Value::as_text),
        Some("2010-01-05")
    );
    assert_eq!(table.get("GESTÃO").and_then(Value::as_text), Some("ATIVA"));
    assert_eq!(
        table.get("SEGMENTO ANBIMA").and_then(Value::as_text),
        Some("TÍTULOS E VAL. MOB.")
    );

    // -- PRICE --
    assert_eq!(table.get("COTAÇÃO").and_then(Value::as_number), Some(98.76));
    assert_eq!(
        table.get("COTAÇÃO MÍNIMA 1 ANO").and_then(Value::as_number),
        Some(90.0)
    );
    assert_eq!(
        table.get("VALORIZAÇÃO DE COTAÇÃO 1 ANO").and_then(Value::as_number),
        Some(4.2)
    );
    assert_eq!(
        table.get("VALORIZAÇÃO DE COTAÇÃO 1 MÊS").and_then(Value::as_number),
        Some(-0.8)
    );
    assert_eq!(
        table.get("DIVIDENDOS PAGOS 1 ANO").and_then(Value::as_number),
        Some(12.4)
    );

    // -- KPI --
    assert_eq!(table.get("DIVIDEND YIELD").and_then(Value::as_number), Some(12.56));
    // "TOTAL" and "VALOR EM CAIXA" are renamed in one pass
    assert_eq!(
        table.get("VALOR EM CAIXA").and_then(Value::as_number),
        Some(25_300_000.0)
    );
    assert_eq!(table.get("VALOR EM CAIXA %").and_then(Value::as_number), Some(3.75));
    assert_eq!(
        table.get("CAGR DIVIDENDOS 3 ANOS").and_then(Value::as_number),
        Some(4.2)
    );
    assert_eq!(
        table.get("QUANTIDADE DE COTISTAS").and_then(Value::as_number),
        Some(125_430.0)
    );
    assert_eq!(
        table.get("TAXA ADMINISTRATIVA").and_then(Value::as_number),
        Some(1.0)
    );
    assert_eq!(table.get("P/VP"), Some(&Value::Null));

    // the view keeps the signed display string
    let kpi = rows.view("kpi").unwrap();
    assert_eq!(kpi.get("VALOR EM CAIXA %"), Some(&Value::from("3.75%")));
}
